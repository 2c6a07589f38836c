pub mod payment;
pub mod product;
pub mod repository;

pub use payment::{PaymentGateway, PaymentIntent, PaymentIntentStatus};
pub use product::Product;
pub use repository::ProductRepository;
