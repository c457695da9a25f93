//! 日志基础设施

use std::io;

use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化日志系统
    ///
    /// `RUST_LOG` 优先于配置中的级别。设置了 `log_path` 时额外写入按日期分割的
    /// 日志文件，返回的 guard 必须在进程退出前保持存活。
    pub fn init(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.level));

        let (file_layer, guard) = match &config.log_path {
            Some(log_dir) => {
                std::fs::create_dir_all(log_dir)?;
                let file_appender = rolling::daily(log_dir, &config.file_prefix);
                let (writer, guard) = non_blocking(file_appender);
                let layer = fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false) // 文件中不使用颜色
                    .with_target(false)
                    .with_thread_names(true);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        let console_layer = config
            .console_output
            .then(|| fmt::layer().with_writer(io::stdout).with_ansi(true));

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .try_init()?;

        Ok(guard)
    }
}
