//! Message 层：事件消息
//!
//! Event 层把终端输入翻译成 [`AppMessage`]，Update 层消费它并修改 Model。
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage
//!         mod content;        // ContentMessage
//!         mod modal;          // ModalMessage
//!         mod navigation;     // NavigationMessage
//!         mod task;           // 渲染后执行的接口任务

mod app;
mod content;
mod modal;
mod navigation;
mod task;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
pub use task::Task;
