//! 产品处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{debug, info};

use super::model::{DeleteResponse, Product, ProductRequest};
use super::validation::{parse_product_id, ValidatedProduct};
use crate::app::AppState;
use crate::core::error::ApiError;
use crate::core::response::ErrorBody;

/// 路径 id 无法解析时按不存在处理
fn resolve_id(raw: &str) -> Result<u64, ApiError> {
    parse_product_id(raw).ok_or_else(|| {
        debug!("无法解析的产品 id: {:?}", raw);
        ApiError::NotFound
    })
}

/// 获取产品列表
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    summary = "Obtener lista de productos",
    responses(
        (status = 200, description = "Lista de productos", body = Vec<Product>)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store.list())
}

/// 按 id 获取产品
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    summary = "Obtener un producto por id",
    params(("id" = u64, Path, description = "Id del producto")),
    responses(
        (status = 200, description = "Un producto", body = Product),
        (status = 404, description = "Producto no encontrado", body = ErrorBody)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = resolve_id(&id)?;
    let product = state.store.get(id)?;
    Ok(Json(product))
}

/// 创建产品
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    summary = "Crear un producto",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Producto creado", body = Product),
        (status = 400, description = "Datos inválidos", body = ErrorBody)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedProduct(input): ValidatedProduct,
) -> (StatusCode, Json<Product>) {
    let product = state.store.create(input);
    info!("产品已创建: id={}, name={}", product.id, product.name);
    (StatusCode::CREATED, Json(product))
}

/// 更新产品
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    summary = "Actualizar producto",
    params(("id" = u64, Path, description = "Id del producto")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Producto actualizado", body = Product),
        (status = 400, description = "Datos inválidos", body = ErrorBody),
        (status = 404, description = "Producto no encontrado", body = ErrorBody)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedProduct(input): ValidatedProduct,
) -> Result<Json<Product>, ApiError> {
    let id = resolve_id(&id)?;
    let product = state.store.update(id, input)?;
    info!("产品已更新: id={}", product.id);
    Ok(Json(product))
}

/// 删除产品
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    summary = "Eliminar producto",
    params(("id" = u64, Path, description = "Id del producto")),
    responses(
        (status = 200, description = "Producto eliminado", body = DeleteResponse),
        (status = 404, description = "Producto no encontrado", body = ErrorBody)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = resolve_id(&id)?;
    let product = state.store.delete(id)?;
    info!("产品已删除: id={}", product.id);
    Ok(Json(DeleteResponse::new(product)))
}
