//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use mobile_nav_core::Key;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::App;

/// 滚轮每格滚动的行数
const WHEEL_ROWS: i16 = 3;
/// 翻页滚动的行数
const PAGE_ROWS: i16 = 10;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        Event::Resize(columns, rows) => AppMessage::Resize { columns, rows },
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    // 部分终端给 `?` 带上 SHIFT 修饰
    if DefaultKeymap::HELP.matches(&key) || key.code == KeyCode::Char('?') {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::CycleLanguage;
    }
    if DefaultKeymap::ADD_STUDENTS.matches(&key) {
        return AppMessage::OpenAddStudents;
    }
    if DefaultKeymap::SHARE_CATEGORY.matches(&key) {
        return AppMessage::OpenShareCategory;
    }

    handle_page_keys(key, app)
}

/// 页面按键：交给导航控制器或正文
fn handle_page_keys(key: KeyEvent, app: &App) -> AppMessage {
    let nav_key = |key: Key, shift: bool| AppMessage::Navigation(NavigationMessage::Key { key, shift });

    if DefaultKeymap::BACK.matches(&key) {
        return nav_key(Key::Escape, false);
    }
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return nav_key(Key::Tab, false);
    }
    // 终端把 Shift+Tab 报告为 BackTab（部分终端同时带 SHIFT 修饰）
    if key.code == KeyCode::BackTab {
        return nav_key(Key::Tab, true);
    }
    if DefaultKeymap::ACTIVATE.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::Activate);
    }

    let on_students = app.current_page.is_students();
    if DefaultKeymap::UP.matches(&key) {
        return AppMessage::Content(if on_students {
            ContentMessage::SelectPrev
        } else {
            ContentMessage::Scroll(-1)
        });
    }
    if DefaultKeymap::DOWN.matches(&key) {
        return AppMessage::Content(if on_students {
            ContentMessage::SelectNext
        } else {
            ContentMessage::Scroll(1)
        });
    }
    if DefaultKeymap::PAGE_UP.matches(&key) {
        return AppMessage::Content(ContentMessage::Scroll(-PAGE_ROWS));
    }
    if DefaultKeymap::PAGE_DOWN.matches(&key) {
        return AppMessage::Content(ContentMessage::Scroll(PAGE_ROWS));
    }

    AppMessage::Noop
}

/// 弹窗按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Esc => ModalMessage::Close,
        KeyCode::Tab => ModalMessage::NextField,
        KeyCode::BackTab => ModalMessage::PrevField,
        KeyCode::Up | KeyCode::Left => ModalMessage::Up,
        KeyCode::Down | KeyCode::Right => ModalMessage::Down,
        KeyCode::Enter => ModalMessage::Confirm,
        KeyCode::Backspace => ModalMessage::Backspace,
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            ModalMessage::Input(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Modal(msg)
}

/// 处理鼠标事件：左键按下 / 抬起模拟触摸，滚轮滚动正文
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if app.modal.is_open() {
        return AppMessage::Noop;
    }
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            AppMessage::Navigation(NavigationMessage::PointerDown { column, row })
        }
        MouseEventKind::Up(MouseButton::Left) => {
            AppMessage::Navigation(NavigationMessage::PointerUp { column, row })
        }
        MouseEventKind::ScrollDown => AppMessage::Content(ContentMessage::Scroll(WHEEL_ROWS)),
        MouseEventKind::ScrollUp => AppMessage::Content(ContentMessage::Scroll(-WHEEL_ROWS)),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::AppConfig;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn app() -> App {
        App::new(AppConfig::default(), Rect::new(0, 0, 100, 30))
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn navigation_keys_become_controller_keys() {
        let app = app();
        assert_eq!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Navigation(NavigationMessage::Key {
                key: Key::Escape,
                shift: false
            })
        );
        assert_eq!(
            handle_event(press(KeyCode::BackTab, KeyModifiers::SHIFT), &app),
            AppMessage::Navigation(NavigationMessage::Key {
                key: Key::Tab,
                shift: true
            })
        );
    }

    #[test]
    fn modal_captures_typing() {
        let mut app = app();
        app.modal.show_help();
        assert_eq!(
            handle_event(press(KeyCode::Char('a'), KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::Input('a'))
        );
        assert_eq!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::Close)
        );
    }

    #[test]
    fn mouse_maps_to_pointer_and_scroll() {
        let app = app();
        let mouse = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 4,
                row: 1,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(
            handle_event(mouse(MouseEventKind::Down(MouseButton::Left)), &app),
            AppMessage::Navigation(NavigationMessage::PointerDown { column: 4, row: 1 })
        );
        assert_eq!(
            handle_event(mouse(MouseEventKind::ScrollDown), &app),
            AppMessage::Content(ContentMessage::Scroll(WHEEL_ROWS))
        );
        assert_eq!(handle_event(Event::Resize(40, 20), &app), AppMessage::Resize { columns: 40, rows: 20 });
    }
}
