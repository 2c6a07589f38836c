use axum::{
    extract::{Path, State},
    Json,
};
use storefront_core::product::Product;

use crate::error::AppError;
use crate::state::AppState;

/// GET /products
/// List every product in the catalog, in store order.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state
        .products
        .list_products()
        .await
        .map_err(|e| AppError::infrastructure("Error fetching products", e))?;

    Ok(Json(products))
}

/// GET /products/{id}
/// Fetch a single product. A missing row is reported as 404; a store
/// failure is reported as 500 so the two stay distinguishable.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, AppError> {
    let product = state
        .products
        .get_product(id)
        .await
        .map_err(|e| AppError::infrastructure("Error fetching products", e))?
        .ok_or(AppError::NotFound("Product not found"))?;

    Ok(Json(product))
}
