//! 产品模块

pub mod handler;
pub mod model;
pub mod store;
pub mod validation;

use axum::{routing::get, Router};

use crate::app::AppState;

pub use model::Product;
pub use store::ProductStore;
pub use validation::ProductInput;

/// 产品路由，挂载在 `/api` 下
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/products/{id}",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
}
