//! # Mi Tienda Digital API
//!
//! 产品管理 REST API：
//! - 内存中的产品存储，所有写操作串行执行
//! - 写操作前的请求体校验
//! - 由路由注解生成的 OpenAPI 文档和 Swagger UI

pub mod app;
pub mod config;
pub mod core;
pub mod docs;
pub mod infrastructure;

pub use app::{create_router, with_layers, AppState};
pub use config::Config;
