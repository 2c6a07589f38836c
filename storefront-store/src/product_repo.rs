use async_trait::async_trait;
use sqlx::PgPool;

use storefront_core::product::Product;
use storefront_core::repository::ProductRepository;

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: i64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list_products(
        &self,
    ) -> Result<Vec<Product>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<ProductRow> = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn get_product(
        &self,
        id: i64,
    ) -> Result<Option<Product>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_maps_onto_product() {
        let row = ProductRow {
            id: 1,
            name: "Runner".to_string(),
            description: None,
            price: 5000,
        };

        let product = Product::from(row);
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Runner");
        assert_eq!(product.description, None);
        assert_eq!(product.price, 5000);
    }
}
