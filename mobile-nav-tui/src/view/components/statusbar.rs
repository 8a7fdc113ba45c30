//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;
    let mut hints = Vec::new();

    match &app.modal.active {
        Some(Modal::ShareCategory { .. }) => {
            hints.push(("Tab", h.next_field));
            hints.push(("↑↓", h.select));
            hints.push(("Enter", h.submit));
            hints.push(("Esc", h.close));
        }
        Some(Modal::AddStudents { .. }) => {
            hints.push(("Enter", h.search));
            hints.push(("↑↓", h.select));
            hints.push(("Esc", h.close));
        }
        Some(Modal::Request { .. }) => {
            hints.push(("Enter", h.submit));
            hints.push(("Esc", h.close));
        }
        Some(Modal::Help) => {
            hints.push(("Esc", h.close));
        }
        None => {
            hints.push(("Tab", h.focus));
            hints.push(("Enter", h.activate));
            hints.push(("Esc", h.close));
            if app.current_page.is_students() {
                hints.push(("↑↓", h.select));
                hints.push(("Alt+s", h.share));
            }
            hints.push(("Alt+a", h.add_students));
            hints.push(("Alt+l", h.language));
            hints.push(("?", h.help));
            hints.push(("Alt+q", h.quit));
        }
    }

    hints
}
