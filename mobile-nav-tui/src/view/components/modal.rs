//! 弹窗组件

use mobile_nav_core::modal::{
    AddStudentsModal, LoadState, RequestModal, ShareCategoryModal, StudentRow,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::{current_language, t};
use crate::model::{App, Modal, ShareField};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ShareCategory {
            modal,
            field,
            message,
        } => render_share_category(frame, modal, *field, message),
        Modal::AddStudents { modal, selected } => render_add_students(frame, modal, *selected),
        Modal::Request { modal } => render_request(frame, modal),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清空背景并画出弹窗边框，返回内容区域
fn frame_modal(frame: &mut Frame, title: &str, width: u16, height: u16) -> Rect {
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn input_line(value: &str, focused: bool) -> Line<'static> {
    let cursor = if focused { "█" } else { "" };
    Line::styled(format!("  {value}{cursor}"), Styles::input(focused))
}

fn label_line(label: &str) -> Line<'static> {
    Line::from(Span::styled(label.to_string(), Style::default().fg(Color::Gray)))
}

/// "发送分类"弹窗
fn render_share_category(
    frame: &mut Frame,
    modal: &ShareCategoryModal,
    field: ShareField,
    message: &str,
) {
    let texts = t();
    let inner = frame_modal(frame, &modal.title(), 56, 12);

    let mut lines = Vec::new();

    // === 分类 ===
    let category_focused = field == ShareField::Category;
    lines.push(label_line(texts.fields.category));
    let selected_label = modal
        .options()
        .into_iter()
        .find(|(id, _)| *id == modal.selected())
        .map(|(_, label)| label)
        .unwrap_or_default();
    let category_line = match modal.categories() {
        LoadState::Loading => Line::styled(
            format!("  {}", texts.common.loading),
            Style::default().fg(Color::DarkGray),
        ),
        LoadState::Failed(error) => {
            Line::styled(format!("  {error}"), Style::default().fg(colors().error))
        }
        LoadState::Idle | LoadState::Loaded(_) => Line::styled(
            format!(
                "  {} {} {}",
                if category_focused { "◀" } else { " " },
                selected_label,
                if category_focused { "▶" } else { " " }
            ),
            Styles::input(category_focused).add_modifier(Modifier::BOLD),
        ),
    };
    lines.push(category_line);
    lines.push(Line::from(""));

    // === 附言 ===
    lines.push(label_line(texts.fields.message));
    lines.push(input_line(message, field == ShareField::Message));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn student_row_line(row: &StudentRow, selected: bool) -> Line<'static> {
    let texts = current_language().texts();
    let c = colors();
    let action_style = if row.action.is_enabled() {
        Style::default().fg(c.success)
    } else {
        Style::default().fg(c.muted)
    };
    let name_style = if selected {
        Styles::selected()
    } else {
        Style::default().fg(c.fg)
    };
    Line::from(vec![
        Span::styled(format!(" [{}] ", row.initial()), Style::default().fg(c.highlight)),
        Span::styled(row.student.name.clone(), name_style),
        Span::styled(format!("  {}", row.student.email), Style::default().fg(c.muted)),
        Span::raw("  "),
        Span::styled(row.action.label(texts).to_string(), action_style),
    ])
}

/// "添加学生"弹窗
fn render_add_students(frame: &mut Frame, modal: &AddStudentsModal, selected: Option<usize>) {
    let texts = t();
    let core = current_language().texts();
    let inner = frame_modal(frame, core.modal.add_students.title, 70, 18);

    let mut lines = vec![
        label_line(texts.fields.search),
        input_line(modal.query(), selected.is_none()),
        Line::from(""),
    ];

    if let Some(status) = modal.status_text() {
        lines.push(Line::styled(
            format!("  {status}"),
            Style::default().fg(Color::DarkGray),
        ));
    } else if let Some(rows) = modal.rows().loaded() {
        for (i, row) in rows.iter().enumerate() {
            lines.push(student_row_line(row, selected == Some(i)));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// "发送邀请"弹窗
fn render_request(frame: &mut Frame, modal: &RequestModal) {
    let texts = t();
    let inner = frame_modal(frame, &modal.title(), 56, 7);
    let lines = vec![
        label_line(texts.fields.message),
        input_line(modal.message(), true),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 帮助弹窗
fn render_help(frame: &mut Frame) {
    let help = &t().help;
    let height = u16::try_from(help.lines.len()).unwrap_or(u16::MAX) + 4;
    let inner = frame_modal(frame, help.title, 60, height);

    let mut lines = vec![Line::from("")];
    for (key, desc) in help.lines {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<24}"), Styles::hint_key()),
            Span::styled(*desc, Styles::hint_desc()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
