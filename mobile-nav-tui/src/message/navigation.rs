//! 导航栏消息
//!
//! 终端输入先翻译成这些消息，update 层再换算成逻辑像素，
//! 构造 [`mobile_nav_core::NavEvent`] 交给导航控制器。

use mobile_nav_core::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 按键（Esc / Tab / Shift+Tab）
    Key { key: Key, shift: bool },
    /// 激活当前焦点元素（Enter）
    Activate,
    /// 鼠标左键按下
    PointerDown { column: u16, row: u16 },
    /// 鼠标左键抬起
    PointerUp { column: u16, row: u16 },
}
