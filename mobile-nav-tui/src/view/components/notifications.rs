//! 通知组件：右上角堆叠显示，到期自动消失

use mobile_nav_core::NotificationKind;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::layout::text_width;
use crate::view::theme::colors;

const MAX_WIDTH: u16 = 40;

/// 渲染通知
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut y = area.y + 1;

    for notification in app.notifications.iter() {
        let width = (text_width(&notification.text) + 4)
            .min(MAX_WIDTH)
            .min(area.width);
        if y + 3 > area.y + area.height {
            break;
        }
        let rect = Rect::new(area.x + area.width - width, y, width, 3);
        let color = match notification.kind {
            NotificationKind::Success => c.success,
            NotificationKind::Error => c.error,
        };
        frame.render_widget(Clear, rect);
        let paragraph = Paragraph::new(notification.text.as_str())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(color))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        frame.render_widget(paragraph, rect);
        y += 3;
    }
}
