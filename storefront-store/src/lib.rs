pub mod app_config;
pub mod database;
pub mod product_repo;

pub use database::DbClient;
pub use product_repo::PgProductRepository;
