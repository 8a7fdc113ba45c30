//! 页眉导航栏组件

use mobile_nav_core::selectors;
use mobile_nav_core::{Document, NodeId};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::{fill, t};
use crate::model::App;
use crate::view::layout::NavGeometry;
use crate::view::theme::colors;

/// 页眉是否带滚动阴影
fn has_shadow(doc: &Document, header: NodeId) -> bool {
    doc.element(header)
        .and_then(|el| el.style("box-shadow"))
        .is_some_and(|shadow| shadow != "none")
}

/// 条目样式：按钮高亮，焦点加下划线，按压时反色
fn item_style(doc: &Document, id: NodeId) -> Style {
    let c = colors();
    let Some(el) = doc.element(id) else {
        return Style::default();
    };
    let mut style = if el.has_class(selectors::BTN) {
        Style::default().bg(c.highlight).fg(c.selected_fg)
    } else if el.has_class(selectors::NAV_TOGGLE) {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else if el.has_class(selectors::USER_GREETING) {
        Style::default().fg(c.muted)
    } else {
        Style::default().fg(c.fg)
    };
    if doc.active_element() == Some(id) {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }
    if el.style("transform").is_some() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn item_label(doc: &Document, id: NodeId) -> String {
    doc.element(id)
        .map(|el| format!(" {} ", el.text()))
        .unwrap_or_default()
}

/// 渲染页眉
pub fn render(app: &App, frame: &mut Frame, geometry: &NavGeometry) {
    let c = colors();
    let doc = &app.page.doc;
    let area = geometry.areas.header;

    let (border_type, border_color) = if has_shadow(doc, app.page.header) {
        (BorderType::Thick, c.border_focused)
    } else {
        (BorderType::Plain, c.border)
    };
    let mode = match app.layout_mode() {
        mobile_nav_core::LayoutMode::Desktop => t().common.desktop,
        mobile_nav_core::LayoutMode::Mobile => t().common.mobile,
    };
    let viewport = fill(
        t().common.viewport,
        &[("mode", mode), ("width", &doc.viewport.width.to_string())],
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color))
        .title_bottom(Line::from(format!(" {viewport} ")).right_aligned());
    frame.render_widget(block, area);

    let brand = Paragraph::new(Span::styled(
        t().common.app_name,
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
    ));
    let brand_area = ratatui::layout::Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        1,
    );
    frame.render_widget(brand, brand_area);

    for item in geometry.items.iter().filter(|item| !item.in_menu) {
        let label = Paragraph::new(Span::styled(item_label(doc, item.id), item_style(doc, item.id)));
        frame.render_widget(label, item.area);
    }
}

/// 渲染展开的折叠菜单（盖在正文之上）
pub fn render_dropdown(app: &App, frame: &mut Frame, geometry: &NavGeometry) {
    let Some((_, rect)) = geometry.menu else {
        return;
    };
    let c = colors();
    let doc = &app.page.doc;

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));
    frame.render_widget(block, rect);

    for item in geometry.items.iter().filter(|item| item.in_menu) {
        let label = Paragraph::new(Span::styled(item_label(doc, item.id), item_style(doc, item.id)));
        frame.render_widget(label, item.area);
    }
}
