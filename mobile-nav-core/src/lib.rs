//! Mobile Navigation Core Library
//!
//! 英语学习平台导航栏的响应式行为，包括：
//! - 虚拟文档树（DOM）与查询
//! - 响应式导航控制器（桌面 / 移动端布局切换、折叠菜单、焦点循环、手势）
//! - 学生相关弹窗的视图模型与后端 API
//! - 自动消失的通知
//!
//! 本库与平台无关：宿主（浏览器绑定、终端界面、测试）负责把原始输入翻译成
//! [`NavEvent`]，并把当前时间传入，控制器自身不持有定时器或全局状态。

pub mod api;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod event;
pub mod gesture;
pub mod i18n;
pub mod modal;
pub mod notify;
pub mod selectors;
pub mod timing;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use api::{HttpStudentsApi, StudentsApi};
pub use config::NavConfig;
pub use controller::{LayoutMode, MenuState, MobileElements, ResponsiveNavigationController};
pub use dom::{Document, Element, NodeId, Viewport};
pub use error::{ApiError, ConfigError, DomError, NavError, NavResult};
pub use event::{Key, NavEvent, Reaction};
pub use i18n::Language;
pub use notify::{Notification, NotificationKind, Notifications};
