//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航栏消息：换算坐标后交给导航控制器
//!         mod content;            // 正文滚动与学生列表选择
//!         mod modal;              // 弹窗输入
//!         mod effect;             // 渲染之后执行的接口任务
//!
//! 导航控制器的防抖和动画帧依赖时间，所以 [`update`] 显式接收 `now`，
//! 测试里可以直接推进时钟。

mod content;
mod effect;
mod modal;
mod navigation;

use std::time::Instant;

use mobile_nav_core::NavEvent;
use ratatui::layout::Rect;

use crate::i18n::{fill, t};
use crate::message::AppMessage;
use crate::model::App;

pub use effect::run as run_task;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage, now: Instant) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Resize { columns, rows } => {
            app.screen = Rect::new(0, 0, columns, rows);
            let width = app.config.viewport_width(columns);
            app.dispatch(NavEvent::Resize { width }, now);
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg, now);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg, now);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::OpenShareCategory => {
            modal::open_share_category(app, now);
        }

        AppMessage::OpenAddStudents => {
            modal::open_add_students(app);
        }

        AppMessage::CycleLanguage => {
            let language = app.language().next();
            app.set_language(language);
            app.set_status(fill(
                t().common.language_changed,
                &[("language", language.display_name())],
            ));
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Tick => {
            if let Some(controller) = app.controller.as_mut() {
                controller.poll(&mut app.page.doc, now);
                if controller.wants_animation_frame() {
                    controller.dispatch(&mut app.page.doc, NavEvent::AnimationFrame, now);
                }
            }
            app.notifications.prune(now);
        }

        AppMessage::Noop => {}
    }
}
