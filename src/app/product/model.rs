//! 产品数据模型

use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// 可以无损表示为整数的最大价格 (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// 产品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// 产品 id，由存储分配
    #[schema(example = 1)]
    pub id: u64,
    /// 产品名称
    #[schema(example = "Laptop Lenovo")]
    pub name: String,
    /// 产品价格
    #[serde(serialize_with = "serialize_price")]
    #[schema(example = 3500)]
    pub price: f64,
}

impl Product {
    pub fn new(id: u64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// 创建/更新请求体，仅用于文档生成
///
/// 实际的请求体以 JSON 值读取，再由 `ProductInput::from_json` 校验。
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductRequest {
    /// 产品名称，去除首尾空白后不能为空
    #[schema(example = "Keyboard")]
    pub name: String,
    /// 产品价格，必须 >= 0
    #[schema(example = 50)]
    pub price: f64,
}

/// 删除成功响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "Producto eliminado")]
    pub message: String,
    pub product: Product,
}

impl DeleteResponse {
    pub fn new(product: Product) -> Self {
        Self {
            message: "Producto eliminado".to_string(),
            product,
        }
    }
}

/// 整数价格输出为 JSON 整数 (`3500` 而不是 `3500.0`)
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integral_price_serializes_as_integer() {
        let product = Product::new(1, "Laptop Lenovo", 3500.0);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value, json!({ "id": 1, "name": "Laptop Lenovo", "price": 3500 }));
        assert_eq!(
            serde_json::to_string(&product).unwrap(),
            r#"{"id":1,"name":"Laptop Lenovo","price":3500}"#
        );
    }

    #[test]
    fn test_fractional_price_serializes_as_float() {
        let product = Product::new(7, "Cable", 19.99);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["price"], json!(19.99));
    }

    #[test]
    fn test_delete_response_shape() {
        let body = DeleteResponse::new(Product::new(1, "Laptop Lenovo", 3500.0));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["message"], "Producto eliminado");
        assert_eq!(value["product"]["id"], 1);
    }
}
