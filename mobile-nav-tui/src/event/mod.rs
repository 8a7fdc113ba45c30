//! Event 层：事件处理
//!
//! 负责将键盘 / 鼠标 / 窗口大小等终端输入转换为 Message。
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//! 接收以下 Event 类型：
//!     Event::Key(KeyEvent)            // 弹窗打开时交给弹窗，否则先匹配全局快捷键，
//!                                     // 再把 Esc / Tab / Shift+Tab / Enter 交给导航栏
//!     Event::Mouse(MouseEvent)        // 左键按下 / 抬起模拟触摸，滚轮滚动正文
//!     Event::Resize(width, height)    // 终端宽度换算成视口宽度，触发布局防抖

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
