//! 核心中间件模块

use std::any::Any;
use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;
use uuid::Uuid;

use super::error::ApiError;
use super::response::ErrorBody;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// 请求日志中间件
///
/// 为每个请求生成 request id，写入响应头并记录访问日志。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let mut response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    info!(
        request_id = %request_id,
        "{} {} - {} - {}ms - User-Agent: {:?}",
        method,
        uri,
        status,
        duration.as_millis(),
        user_agent
    );

    response
}

/// 未匹配路由
pub async fn route_not_found() -> Response {
    (
        axum::http::StatusCode::NOT_FOUND,
        Json(ErrorBody::new("Ruta no encontrada")),
    )
        .into_response()
}

/// `CatchPanicLayer` 的处理函数：把 panic 转换为 500 响应
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "未知 panic".to_string()
    };

    ApiError::Internal(format!("处理器发生 panic: {}", detail)).into_response()
}
