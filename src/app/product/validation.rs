//! 产品输入校验
//!
//! 请求体在进入存储之前必须转换为 [`ProductInput`]，路径 id 通过
//! [`parse_product_id`] 解析。

use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::core::error::ApiError;

pub const NAME_INVALID: &str = "El nombre es obligatorio y no puede estar vacío.";
pub const PRICE_INVALID: &str = "El precio debe ser un número válido y >= 0.";

/// 已校验的产品数据
///
/// 只能通过 [`ProductInput::new`] 或 [`ProductInput::from_json`] 构造，
/// 因此名称总是去除空白且非空，价格总是有限且 >= 0。
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ProductInput {
    #[validate(length(min = 1))]
    name: String,
    #[validate(range(min = 0.0))]
    price: f64,
}

impl ProductInput {
    pub fn new(name: &str, price: f64) -> Result<Self, ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidInput(NAME_INVALID.to_string()));
        }
        // range 校验不会拒绝 NaN
        if !price.is_finite() {
            return Err(ApiError::InvalidInput(PRICE_INVALID.to_string()));
        }

        let input = Self {
            name: name.to_string(),
            price,
        };
        input.validate().map_err(invalid_input)?;
        Ok(input)
    }

    /// 从未经信任的 JSON 请求体构造
    ///
    /// `name` 必须是字符串，`price` 必须是数字；非对象的请求体视为缺少 `name`。
    pub fn from_json(body: &Value) -> Result<Self, ApiError> {
        let name = body
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::InvalidInput(NAME_INVALID.to_string()))?;

        // 先检查名称内容，保证名称错误优先
        if name.trim().is_empty() {
            return Err(ApiError::InvalidInput(NAME_INVALID.to_string()));
        }

        let price = body
            .get("price")
            .and_then(Value::as_f64)
            .ok_or_else(|| ApiError::InvalidInput(PRICE_INVALID.to_string()))?;

        Self::new(name, price)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// 校验错误转换为 400，名称优先于价格报告
fn invalid_input(errors: ValidationErrors) -> ApiError {
    let message = if errors.field_errors().contains_key("name") {
        NAME_INVALID
    } else {
        PRICE_INVALID
    };
    ApiError::InvalidInput(message.to_string())
}

/// 提取并校验产品请求体
///
/// 校验失败时直接返回 400（请求体过大时为 413），处理器和存储都不会被调用。
#[derive(Debug)]
pub struct ValidatedProduct(pub ProductInput);

impl<S> FromRequest<S> for ValidatedProduct
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    ApiError::PayloadTooLarge(rejection.body_text())
                } else {
                    ApiError::InvalidInput(rejection.body_text())
                }
            })?;

        ProductInput::from_json(&body).map(ValidatedProduct)
    }
}

/// 宽松地解析路径中的产品 id
///
/// 去除空白后按数字读取，只有有限的正整数值才是合法 id（`"2"`、`"2.0"`、
/// `" 2 "` 都表示 2）。其余输入返回 `None`，由调用方按"不存在"处理。
pub fn parse_product_id(raw: &str) -> Option<u64> {
    let value: f64 = raw.trim().parse().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value >= 1.0 && value <= u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}
