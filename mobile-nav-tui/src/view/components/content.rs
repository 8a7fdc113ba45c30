//! 正文组件

use mobile_nav_core::modal::LoadState;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::{fill, t};
use crate::model::{App, Page};
use crate::view::theme::{colors, Styles};

/// 渲染正文
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", app.current_page.title(texts)))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let mut lines = vec![Line::from("")];
    match &app.current_page {
        Page::Home => lines.push(Line::from(texts.pages.home_body)),
        Page::Dictionary => lines.push(Line::from(texts.pages.dictionary_body)),
        Page::Tests => lines.push(Line::from(texts.pages.tests_body)),
        Page::Students => student_lines(app, &mut lines),
        Page::Other(href) => lines.push(Line::styled(
            fill(texts.pages.not_found, &[("href", href)]),
            Style::default().fg(c.muted),
        )),
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.scroll_rows, 0));
    frame.render_widget(paragraph, area);
}

fn student_lines(app: &App, lines: &mut Vec<Line<'static>>) {
    let texts = t();
    let c = colors();
    lines.push(Line::from(texts.pages.students_body));
    lines.push(Line::from(""));

    match &app.students {
        LoadState::Idle | LoadState::Loading => {
            lines.push(Line::styled(texts.common.loading, Style::default().fg(c.muted)));
        }
        LoadState::Failed(message) => {
            lines.push(Line::styled(message.clone(), Style::default().fg(c.error)));
        }
        LoadState::Loaded(students) if students.is_empty() => {
            lines.push(Line::styled(texts.pages.no_students, Style::default().fg(c.muted)));
        }
        LoadState::Loaded(students) => {
            for (i, student) in students.iter().enumerate() {
                let selected = i == app.selected_student;
                let marker = if selected { "▶ " } else { "  " };
                let name_style = if selected {
                    Styles::selected()
                } else {
                    Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
                };
                lines.push(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(student.name.clone(), name_style),
                    Span::styled(format!("  {}", student.email), Style::default().fg(c.muted)),
                ]));
            }
        }
    }
}
