//! Mobile Nav TUI
//!
//! 在终端里演示响应式导航栏：终端宽度换算成视口宽度，
//! 窄终端下导航栏折叠成菜单按钮，鼠标点击 / 拖动模拟触摸。
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与学生接口 (`backend/`)
//!
//! 启动顺序：
//!
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件，终端留给 UI
//!     ConfigService::load()   // 读取配置，失败时使用默认值
//!     Backend::new()          // 选择真实接口或演示数据
//!     init_terminal()         // raw mode + 备用屏幕 + 鼠标捕获
//!     App::new()              // 创建演示页面并挂载导航控制器
//!     app::run()              // 运行主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!     ConfigService::save_language() // 语言切换过时只写回语言
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use ratatui::layout::Rect;

use backend::{AppConfig, Backend, ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志（失败不影响运行）
    match init_logging() {
        Ok(path) => log::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Failed to initialize logging: {e:#}"),
    }

    // 2. 配置
    let config_service = LocalConfigService::default();
    let config = config_service.load().unwrap_or_else(|e| {
        log::warn!("Invalid config {}: {e:#}", config_service.path().display());
        AppConfig::default()
    });

    let initial_language = config.nav.language;

    // 3. 接口服务
    let backend = Backend::new(&config)?;

    // 4. 初始化终端
    let mut terminal = init_terminal()?;
    let size = terminal.size()?;

    // 5. 创建应用实例
    let mut app = model::App::new(config, Rect::new(0, 0, size.width, size.height));

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &backend);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 8. 记住切换后的语言
    if app.language() != initial_language {
        if let Err(e) = config_service.save_language(app.language()) {
            log::warn!("Failed to save config: {e:#}");
        }
    }

    // 9. 返回结果
    result
}
