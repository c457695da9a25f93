//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::response::ErrorBody;

pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";
pub const INTERNAL_ERROR: &str = "Error interno del servidor";

/// API 错误类型
///
/// 每个变体对应一个 HTTP 状态码，响应体统一为 `{"error": "..."}`。
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ApiError {
    /// 请求数据无效 (400)
    #[error("{0}")]
    InvalidInput(String),
    /// 请求体超过大小限制 (413)
    #[error("{0}")]
    PayloadTooLarge(String),
    /// 产品不存在 (404)
    #[error("{}", PRODUCT_NOT_FOUND)]
    NotFound,
    /// 未预期的内部错误 (500)，详细信息只写入日志
    #[error("内部错误: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::InvalidInput(msg) | ApiError::PayloadTooLarge(msg) => msg,
            ApiError::NotFound => PRODUCT_NOT_FOUND.to_string(),
            ApiError::Internal(detail) => {
                error!("请求处理失败: {}", detail);
                INTERNAL_ERROR.to_string()
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::InvalidInput("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::PayloadTooLarge("x".to_string()).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_detail_not_in_response() {
        let response = ApiError::Internal("secreto".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Error interno del servidor" }));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::NotFound.to_string(), "Producto no encontrado");
    }
}
