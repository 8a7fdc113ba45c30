//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 导航栏
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const ACTIVATE: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 正文
    pub const UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const PAGE_UP: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const PAGE_DOWN: KeyBinding = KeyBinding::key(KeyCode::PageDown);

    // 弹窗
    pub const SHARE_CATEGORY: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const ADD_STUDENTS: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));
}
