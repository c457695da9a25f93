//! 应用层：路由组装和共享状态

pub mod product;

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, middleware, response::Json, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::core::middleware::{handle_panic, request_logging_middleware, route_not_found};
use crate::docs;
use product::ProductStore;

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProductStore>,
}

impl AppState {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// 创建完整的应用路由
pub fn create_router(state: AppState, config: &Config) -> Router {
    let mut router = Router::new()
        .nest("/api", product::routes())
        .route("/health", get(health_check))
        .fallback(route_not_found)
        .with_state(state);

    if config.docs.enabled {
        router = router.merge(docs::swagger_router(config));
    }

    with_layers(router, config)
}

/// 应用中间件层：请求日志、追踪、panic 捕获、CORS 和超时
pub fn with_layers(router: Router, config: &Config) -> Router {
    let cors = if config.http.cors_permissive {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    // 按顺序应用：日志在最外层，才能记录 panic 转换后的 500
    router.layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(request_logging_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(cors)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.http.timeout_seconds,
            ))),
    )
}

/// 健康检查
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "products": state.store.len(),
    }))
}
