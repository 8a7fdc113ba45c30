//! View 层：UI 渲染
//!
//! 只读取 Model，不修改状态。导航栏的几何（[`layout::NavGeometry`]）
//! 同时提供给 Update 层做鼠标命中测试。
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 页眉、正文、状态栏、通知、弹窗
//!         mod layout;         // 主布局与导航栏几何
//!         mod theme;          // 颜色和样式

mod components;
pub mod layout;
pub mod theme;

pub use layout::render;
