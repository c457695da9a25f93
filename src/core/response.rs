//! 核心响应处理模块

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 错误响应结构
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// 可读的错误信息
    #[schema(example = "Producto no encontrado")]
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
