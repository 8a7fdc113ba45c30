//! 正文更新逻辑

use std::time::Instant;

use mobile_nav_core::NavEvent;

use crate::message::ContentMessage;
use crate::model::App;

/// 处理正文消息
pub fn update(app: &mut App, msg: ContentMessage, now: Instant) {
    match msg {
        ContentMessage::Scroll(delta) => {
            app.scroll_rows = app.scroll_rows.saturating_add_signed(delta);
            let offset = f64::from(u32::from(app.scroll_rows) * app.config.px_per_row());
            app.dispatch(NavEvent::Scroll { offset }, now);
        }

        ContentMessage::SelectPrev => {
            app.selected_student = app.selected_student.saturating_sub(1);
        }

        ContentMessage::SelectNext => {
            let len = app.students.loaded().map_or(0, Vec::len);
            if app.selected_student + 1 < len {
                app.selected_student += 1;
            }
        }
    }
}
