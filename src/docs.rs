//! OpenAPI 文档和 Swagger UI
//!
//! 文档由处理器上的 `#[utoipa::path]` 注解生成，与实际路由表保持一致。

use axum::Router;
use utoipa::openapi::{OpenApi as OpenApiDoc, ServerBuilder};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::app::product::handler;
use crate::app::product::model::{DeleteResponse, Product, ProductRequest};
use crate::config::Config;
use crate::core::response::ErrorBody;

pub const DOCS_PATH: &str = "/api-docs";
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mi Tienda Digital API",
        version = "1.0.0",
        description = "API REST para gestionar productos (ejercicio)"
    ),
    paths(
        handler::list_products,
        handler::get_product,
        handler::create_product,
        handler::update_product,
        handler::delete_product
    ),
    components(schemas(Product, ProductRequest, DeleteResponse, ErrorBody)),
    tags((name = "products", description = "Gestión de productos"))
)]
pub struct ApiDoc;

/// 生成 OpenAPI 文档，并加入配置中的服务地址
pub fn openapi(config: &Config) -> OpenApiDoc {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![ServerBuilder::new().url(config.public_url()).build()]);
    doc
}

/// Swagger UI 路由
pub fn swagger_router(config: &Config) -> Router {
    SwaggerUi::new(DOCS_PATH)
        .url(OPENAPI_JSON_PATH, openapi(config))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_covers_routing_table() {
        let doc = openapi(&Config::default());
        let paths = &doc.paths.paths;

        let collection = paths.get("/api/products").unwrap();
        assert!(collection.get.is_some());
        assert!(collection.post.is_some());

        let item = paths.get("/api/products/{id}").unwrap();
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }

    #[test]
    fn test_openapi_server_url_from_config() {
        let mut config = Config::default();
        config.http.port = 4000;
        let doc = openapi(&config);
        let servers = doc.servers.unwrap();
        assert_eq!(servers[0].url, "http://localhost:4000");
    }
}
