//! Model 层：应用状态
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;        // 应用主状态 App
//!         mod modal;      // 弹窗状态
//!         mod page;       // 演示页面（导航控制器操作的文档）
//!
//! App 持有文档和挂载在文档上的导航控制器。
//! 导航栏的实际结构（桌面 / 移动端、菜单开合）只存在于文档中，
//! Model 层不再另存一份，View 层每一帧直接读取文档。

mod app;
mod modal;
mod page;

pub use app::{App, PointerDown};
pub use modal::{Modal, ModalState, ShareField};
pub use page::{DemoPage, Page};
