//! UI 组件

pub mod content;
pub mod modal;
pub mod navbar;
pub mod notifications;
pub mod statusbar;
