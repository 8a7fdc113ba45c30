//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

/// 获取颜色方案（深色）
pub fn colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(30, 30, 30),
        fg: Color::Rgb(212, 212, 212),
        border: Color::Rgb(62, 62, 62),
        border_focused: Color::Rgb(0, 122, 204),
        highlight: Color::Rgb(0, 122, 204),
        selected_bg: Color::Rgb(38, 79, 120),
        selected_fg: Color::White,
        success: Color::Rgb(78, 201, 176),
        error: Color::Rgb(244, 135, 113),
        muted: Color::Rgb(128, 128, 128),
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(colors().fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default().bg(colors().highlight).fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }

    /// 输入框样式
    pub fn input(focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        }
    }
}
