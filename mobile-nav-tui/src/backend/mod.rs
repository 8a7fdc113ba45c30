//! Backend 层：配置与学生接口
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件读写
//!         mod demo_api;           // 离线演示数据
//!
//! 弹窗的接口调用是异步的，而主循环是同步的。
//! Backend 持有一个 tokio 运行时，update 层产生的任务在渲染之后由 app.rs
//! 交给 [`Backend::block_on`] 执行，执行结果再作为消息送回 update 层。

mod config_service;
mod demo_api;

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use mobile_nav_core::{HttpStudentsApi, StudentsApi};
use tokio::runtime::Runtime;

pub use config_service::{ApiSettings, AppConfig, ConfigService, LocalConfigService};
pub use demo_api::DemoStudentsApi;

/// 接口服务
pub struct Backend {
    runtime: Runtime,
    api: Arc<dyn StudentsApi>,
}

impl Backend {
    /// 按配置选择真实接口或演示数据
    pub fn new(config: &AppConfig) -> Result<Self> {
        let api: Arc<dyn StudentsApi> = match &config.api {
            Some(settings) => {
                log::info!("Using students API at {}", settings.base_url);
                Arc::new(HttpStudentsApi::new(&settings.base_url, settings.csrf_token.clone())?)
            }
            None => {
                log::info!("No students API configured, using demo data");
                Arc::new(DemoStudentsApi::new())
            }
        };
        Self::with_api(api)
    }

    pub fn with_api(api: Arc<dyn StudentsApi>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        Ok(Self { runtime, api })
    }

    pub fn api(&self) -> &dyn StudentsApi {
        self.api.as_ref()
    }

    /// 在后台运行时上执行异步任务并等待结果
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}
