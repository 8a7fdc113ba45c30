//! 主布局与导航栏几何
//!
//! 导航栏条目的位置由文档结构推出，渲染和鼠标命中测试共用同一份几何，
//! 保证点到的就是画出来的。

use mobile_nav_core::selectors;
use mobile_nav_core::{Document, NodeId};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;

use super::components;

/// 页眉高度（含边框）
const HEADER_HEIGHT: u16 = 3;

/// 三块主区域：页眉 + 正文 + 状态栏
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub content: Rect,
    pub status: Rect,
}

impl Areas {
    pub fn new(screen: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT), // 页眉
                Constraint::Min(1),                // 正文
                Constraint::Length(1),             // 状态栏
            ])
            .split(screen);
        Self {
            header: chunks[0],
            content: chunks[1],
            status: chunks[2],
        }
    }
}

/// 导航栏里一个可见条目的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: NodeId,
    pub area: Rect,
    /// 是否位于展开的折叠菜单里
    pub in_menu: bool,
}

/// 导航栏几何
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGeometry {
    pub areas: Areas,
    pub nav: NodeId,
    pub content_node: NodeId,
    pub items: Vec<NavItem>,
    /// 展开的折叠菜单（下拉框）
    pub menu: Option<(NodeId, Rect)>,
}

pub fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

fn element_text(doc: &Document, id: NodeId) -> &str {
    doc.element(id).map_or("", |el| el.text())
}

impl NavGeometry {
    /// 按文档当前结构计算条目位置
    pub fn compute(doc: &Document, nav: NodeId, content_node: NodeId, brand: &str, screen: Rect) -> Self {
        let areas = Areas::new(screen);
        let header = areas.header;
        let row = header.y + 1;
        let left = header.x + 1;
        let right = (header.x + header.width).saturating_sub(1);

        let mut items = Vec::new();
        let mut menu = None;
        let mut x = left + text_width(brand) + 2;

        for &child in doc.children(nav) {
            let Some(el) = doc.element(child) else {
                continue;
            };
            if el.has_class(selectors::NAV_TOGGLE) {
                let w = text_width(el.text()) + 2;
                let area = Rect::new(right.saturating_sub(w), row, w, 1);
                items.push(NavItem {
                    id: child,
                    area,
                    in_menu: false,
                });
            } else if el.has_class(selectors::NAV_MENU) {
                if el.has_class(selectors::ACTIVE) {
                    let (rect, entries) = Self::dropdown(doc, child, &areas, right);
                    items.extend(entries);
                    menu = Some((child, rect));
                }
            } else {
                let w = text_width(el.text()) + 2;
                if x + w <= right {
                    items.push(NavItem {
                        id: child,
                        area: Rect::new(x, row, w, 1),
                        in_menu: false,
                    });
                }
                x += w + 1;
            }
        }

        Self {
            areas,
            nav,
            content_node,
            items,
            menu,
        }
    }

    /// 折叠菜单展开后的下拉框：贴在页眉下方右侧，每个条目一行
    fn dropdown(doc: &Document, menu: NodeId, areas: &Areas, right: u16) -> (Rect, Vec<NavItem>) {
        let children = doc.children(menu);
        let widest = children
            .iter()
            .map(|id| text_width(element_text(doc, *id)))
            .max()
            .unwrap_or(0);
        let available_width = right.saturating_sub(areas.header.x);
        let width = (widest + 4).min(available_width);
        let count = u16::try_from(children.len()).unwrap_or(u16::MAX);
        let height = (count + 2).min(areas.content.height);
        let rect = Rect::new(right.saturating_sub(width), areas.content.y, width, height);

        let inner_rows = height.saturating_sub(2);
        let entries = children
            .iter()
            .zip(0..inner_rows)
            .map(|(id, i)| NavItem {
                id: *id,
                area: Rect::new(rect.x + 1, rect.y + 1 + i, width.saturating_sub(2), 1),
                in_menu: true,
            })
            .collect();
        (rect, entries)
    }

    /// 鼠标命中测试：返回最内层的节点
    ///
    /// 下拉框在最上层，优先于正文；页眉空白处视为导航栏本身，
    /// 正文区域视为正文节点，状态栏不属于文档。
    pub fn hit(&self, column: u16, row: u16) -> Option<NodeId> {
        let inside = |r: Rect| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        };
        if let Some((menu, rect)) = self.menu {
            if inside(rect) {
                return Some(
                    self.items
                        .iter()
                        .find(|item| item.in_menu && inside(item.area))
                        .map_or(menu, |item| item.id),
                );
            }
        }
        if inside(self.areas.header) {
            return Some(
                self.items
                    .iter()
                    .find(|item| !item.in_menu && inside(item.area))
                    .map_or(self.nav, |item| item.id),
            );
        }
        if inside(self.areas.content) {
            return Some(self.content_node);
        }
        None
    }

    /// 可见且可聚焦的条目，按文档顺序
    pub fn focusable(&self, doc: &Document) -> Vec<NodeId> {
        doc.focusable_within(doc.root())
            .into_iter()
            .filter(|id| self.items.iter().any(|item| item.id == *id))
            .collect()
    }
}

/// 当前 App 状态下的导航栏几何
pub fn geometry(app: &App) -> NavGeometry {
    NavGeometry::compute(
        &app.page.doc,
        app.page.nav,
        app.page.content,
        t().common.app_name,
        app.screen,
    )
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let geometry = geometry(app);

    // 页眉（导航栏）
    components::navbar::render(app, frame, &geometry);

    // 正文
    components::content::render(app, frame, geometry.areas.content);

    // 状态栏
    components::statusbar::render(app, frame, geometry.areas.status);

    // 下拉菜单盖在正文之上
    components::navbar::render_dropdown(app, frame, &geometry);

    // 通知
    components::notifications::render(app, frame, geometry.areas.content);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::AppConfig;
    use mobile_nav_core::ResponsiveNavigationController;

    fn app(columns: u16) -> App {
        App::new(AppConfig::default(), Rect::new(0, 0, columns, 24))
    }

    #[test]
    fn desktop_items_are_laid_out_inline() {
        let app = app(120);
        let g = geometry(&app);
        assert_eq!(g.items.len(), 6);
        assert!(g.menu.is_none());
        assert!(g.items.windows(2).all(|w| w[0].area.x < w[1].area.x));
        assert!(g.items.iter().all(|item| item.area.y == 1));
    }

    #[test]
    fn hit_test_finds_items_and_regions() {
        let app = app(120);
        let g = geometry(&app);
        let first = g.items[0];
        assert_eq!(g.hit(first.area.x, first.area.y), Some(first.id));
        assert_eq!(g.hit(0, 0), Some(app.page.nav));
        assert_eq!(g.hit(10, 10), Some(app.page.content));
        assert_eq!(g.hit(10, 23), None);
    }

    #[test]
    fn mobile_shows_toggle_then_dropdown_when_open() {
        let mut app = app(50);
        let els = ResponsiveNavigationController::mobile_elements(&app.page.doc).unwrap();
        let g = geometry(&app);
        assert_eq!(g.items.len(), 1);
        assert_eq!(g.items[0].id, els.toggle);

        app.controller
            .as_mut()
            .unwrap()
            .toggle_menu(&mut app.page.doc);
        let g = geometry(&app);
        let (menu, rect) = g.menu.unwrap();
        assert_eq!(menu, els.menu);
        assert_eq!(rect.height, 8);
        let in_menu: Vec<NodeId> = g.items.iter().filter(|i| i.in_menu).map(|i| i.id).collect();
        assert_eq!(in_menu, app.page.doc.children(els.menu));
        // 下拉框盖住正文
        let link = g.items.iter().find(|i| i.in_menu).unwrap();
        assert_eq!(g.hit(link.area.x, link.area.y), Some(link.id));
        assert_eq!(g.hit(rect.x, rect.y), Some(els.menu));
    }

    #[test]
    fn focusable_skips_hidden_entries() {
        let app = app(50);
        let g = geometry(&app);
        let els = ResponsiveNavigationController::mobile_elements(&app.page.doc).unwrap();
        assert_eq!(g.focusable(&app.page.doc), vec![els.toggle]);
    }
}
