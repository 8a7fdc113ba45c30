//! 导航栏更新逻辑
//!
//! 把终端坐标换算成逻辑像素，构造 [`NavEvent`] 交给导航控制器，
//! 再按控制器返回的 [`Reaction`] 执行宿主的默认行为。

use std::time::Instant;

use mobile_nav_core::gesture::Point;
use mobile_nav_core::{Key, NavEvent, NodeId, Reaction};

use crate::i18n::{fill, t};
use crate::message::{NavigationMessage, Task};
use crate::model::{App, Page, PointerDown};
use crate::view::layout::geometry;

/// 处理导航栏消息
pub fn update(app: &mut App, msg: NavigationMessage, now: Instant) {
    match msg {
        NavigationMessage::Key { key, shift } => {
            let reaction = app.dispatch(NavEvent::KeyDown { key, shift }, now);
            // 控制器不处理的 Tab 走宿主默认的焦点移动
            if key == Key::Tab && !reaction.is_handled() {
                move_focus(app, shift);
            }
            apply_reaction(app, reaction);
        }

        NavigationMessage::Activate => {
            if let Some(target) = app.page.doc.active_element() {
                click(app, Some(target), now);
            }
        }

        NavigationMessage::PointerDown { column, row } => {
            let target = geometry(app).hit(column, row);
            app.pointer = Some(PointerDown { column, row });
            let point = to_point(app, column, row);
            app.dispatch(NavEvent::TouchStart { point, target }, now);
        }

        NavigationMessage::PointerUp { column, row } => {
            let target = geometry(app).hit(column, row);
            let point = to_point(app, column, row);
            let reaction = app.dispatch(NavEvent::TouchEnd { point, target }, now);
            let down = app.pointer.take();
            if reaction.is_handled() {
                return;
            }
            // 没有明显拖动才算点击
            if let Some(down) = down {
                if down.row == row && down.column.abs_diff(column) <= 1 {
                    let target = geometry(app).hit(down.column, down.row);
                    click(app, target, now);
                }
            }
        }
    }
}

/// 终端坐标换算成逻辑像素
fn to_point(app: &App, column: u16, row: u16) -> Point {
    Point::new(
        f64::from(u32::from(column) * app.config.px_per_column),
        f64::from(u32::from(row) * app.config.px_per_row()),
    )
}

/// 点击：可聚焦的目标先获得焦点，再交给控制器
fn click(app: &mut App, target: Option<NodeId>, now: Instant) {
    match target {
        Some(id) => {
            if !app.page.doc.focus(id) {
                app.page.doc.blur();
            }
        }
        None => app.page.doc.blur(),
    }
    let reaction = app.dispatch(NavEvent::Click { target }, now);
    apply_reaction(app, reaction);
}

/// 宿主默认的 Tab 行为：在可见的可聚焦条目之间循环
fn move_focus(app: &mut App, backwards: bool) {
    let focusable = geometry(app).focusable(&app.page.doc);
    let len = focusable.len();
    if len == 0 {
        return;
    }
    let current = app
        .page
        .doc
        .active_element()
        .and_then(|id| focusable.iter().position(|f| *f == id));
    let next = match (current, backwards) {
        (None, false) => 0,
        (None, true) => len - 1,
        (Some(i), false) => (i + 1) % len,
        (Some(i), true) => (i + len - 1) % len,
    };
    app.page.doc.focus(focusable[next]);
}

fn apply_reaction(app: &mut App, reaction: Reaction) {
    if let Reaction::FollowLink { href } = reaction {
        navigate(app, &href);
    }
}

/// 跳转到链接地址
pub fn navigate(app: &mut App, href: &str) {
    log::info!("Navigating to {href}");
    app.current_page = Page::from_href(href);
    app.scroll_rows = 0;
    app.set_status(fill(t().common.followed, &[("href", href)]));
    if app.current_page.is_students() {
        app.selected_student = 0;
        app.students = mobile_nav_core::modal::LoadState::Loading;
        app.pending = Some(Task::LoadStudents);
    }
}
