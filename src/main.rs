use tienda_api::app::product::ProductStore;
use tienda_api::infrastructure::logger::Logger;
use tienda_api::{config, create_router, docs, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;
    let _guard = Logger::init(&config.logging)?;

    info!("启动 Mi Tienda Digital API...");

    let store = ProductStore::seeded();
    info!("✅ 已初始化 {} 个示例产品", store.len());

    let app = create_router(AppState::new(store), &config);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;

    let base_url = config.public_url();
    info!("🚀 API 运行在 {}", base_url);
    info!("📖 API 端点:");
    info!("   GET    /api/products      - 获取所有产品");
    info!("   POST   /api/products      - 创建新产品");
    info!("   GET    /api/products/{{id}} - 获取特定产品");
    info!("   PUT    /api/products/{{id}} - 更新产品");
    info!("   DELETE /api/products/{{id}} - 删除产品");
    info!("   GET    /health            - 健康检查");
    if config.docs.enabled {
        info!("📚 文档 (Swagger): {}{}", base_url, docs::DOCS_PATH);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("无法监听 Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("无法监听 SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到关闭信号，正在停止服务器...");
}
