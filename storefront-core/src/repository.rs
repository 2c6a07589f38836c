use async_trait::async_trait;

use crate::product::Product;

/// Repository trait for catalog data access
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, in the order the store yields them.
    async fn list_products(
        &self,
    ) -> Result<Vec<Product>, Box<dyn std::error::Error + Send + Sync>>;

    /// A single product by key. `Ok(None)` means no matching row, which is
    /// a different condition from the store call failing.
    async fn get_product(
        &self,
        id: i64,
    ) -> Result<Option<Product>, Box<dyn std::error::Error + Send + Sync>>;
}
