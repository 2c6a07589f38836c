use std::sync::Arc;

use storefront_core::payment::PaymentGateway;
use storefront_core::repository::ProductRepository;

/// Process-wide dependencies, created once at startup and shared across
/// requests. Handlers only issue calls through these handles; nothing here
/// carries request-scoped mutable state.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub gateway: Arc<dyn PaymentGateway>,
}
