//! # HTTP Layer
//!
//! JSON over HTTP for the product catalogue, built on axum.
//!
//! | Method & path | Success | Errors |
//! |---------------|---------|--------|
//! | `GET /api/products` | 200 + array | |
//! | `GET /api/products/{id}` | 200 + product | 404 |
//! | `POST /api/products` | 201 + product | 400 |
//! | `PUT /api/products/{id}` | 200 + product | 400, 404 |
//! | `DELETE /api/products/{id}` | 204 | 404 |
//! | `GET /api/products/search?name=&priceBelow=&priceAbove=&quantityAbove=` | 200 + array | 400 |
//! | `GET /api/products/count` | 200 + `{"count": n}` | |
//!
//! Errors carry a JSON body of the form `{"error": "Product not found with id: 7"}`.

pub mod error;
pub mod handlers;

pub use error::ApiError;

use crate::service::ProductService;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Builds the application router around an explicitly passed service.
pub fn router(service: ProductService) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/api/products/search", get(handlers::search_products))
        .route("/api/products/count", get(handlers::count_products))
        .route(
            "/api/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
