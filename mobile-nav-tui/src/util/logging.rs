//! 日志初始化
//!
//! 标准输出被终端界面占用，日志写入数据目录下的文件。
//! 核心库通过 `log` 宏输出，经 tracing-subscriber 的 log 桥接进入同一个文件。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件路径：`<data_dir>/mobile-nav/mobile-nav-tui.log`
pub fn log_file_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("mobile-nav")
        .join("mobile-nav-tui.log")
}

/// 安装全局日志订阅器，返回日志文件路径
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(path)
}
