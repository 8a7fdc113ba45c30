//! 折叠菜单的开合与焦点循环

use crate::dom::{Document, NodeId};
use crate::event::Reaction;
use crate::selectors;

use super::{MenuState, ResponsiveNavigationController};

impl ResponsiveNavigationController {
    /// 当前菜单状态；桌面模式下为 `None`
    pub fn menu_state(doc: &Document) -> Option<MenuState> {
        let els = Self::mobile_elements(doc)?;
        let open = doc
            .element(els.menu)
            .is_some_and(|el| el.has_class(selectors::ACTIVE));
        Some(if open { MenuState::Open } else { MenuState::Closed })
    }

    /// 切换菜单开合；桌面模式下为 no-op，返回 `None`
    pub fn toggle_menu(&mut self, doc: &mut Document) -> Option<MenuState> {
        let els = Self::mobile_elements(doc)?;
        let next = match Self::menu_state(doc)? {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
        self.apply_menu_state(doc, els.toggle, els.menu, next == MenuState::Open);
        log::debug!("Mobile menu toggled: {next:?}");
        Some(next)
    }

    /// 强制关闭菜单（幂等），返回关闭前菜单是否处于打开状态
    pub fn close_menu(&mut self, doc: &mut Document) -> bool {
        let Some(els) = Self::mobile_elements(doc) else {
            return false;
        };
        let was_open = Self::menu_state(doc) == Some(MenuState::Open);
        self.apply_menu_state(doc, els.toggle, els.menu, false);
        if was_open {
            log::debug!("Mobile menu closed");
        }
        was_open
    }

    /// 同步写入菜单可见性、按钮图标和无障碍标签
    pub(super) fn apply_menu_state(
        &self,
        doc: &mut Document,
        toggle: NodeId,
        menu: NodeId,
        open: bool,
    ) {
        if let Some(el) = doc.element_mut(menu) {
            if open {
                el.add_class(selectors::ACTIVE);
            } else {
                el.remove_class(selectors::ACTIVE);
            }
        }
        if let Some(el) = doc.element_mut(toggle) {
            let (glyph, label) = if open {
                (selectors::GLYPH_CLOSE, self.labels.close_menu)
            } else {
                (selectors::GLYPH_OPEN, self.labels.open_menu)
            };
            el.set_text(glyph);
            el.set_attribute("aria-label", label);
            el.set_attribute("aria-expanded", if open { "true" } else { "false" });
        }
    }

    /// 菜单打开时让 Tab 焦点在菜单内循环
    ///
    /// 焦点在最后一个元素时 Tab 回到第一个，在第一个元素时 Shift+Tab 跳到最后一个。
    /// 菜单内没有可聚焦元素时不处理。
    pub(super) fn wrap_focus(&mut self, doc: &mut Document, shift: bool) -> Reaction {
        if Self::menu_state(doc) != Some(MenuState::Open) {
            return Reaction::Ignored;
        }
        let Some(els) = Self::mobile_elements(doc) else {
            return Reaction::Ignored;
        };
        let focusable = doc.focusable_within(els.menu);
        let (Some(&first), Some(&last)) = (focusable.first(), focusable.last()) else {
            return Reaction::Ignored;
        };

        let active = doc.active_element();
        if shift && active == Some(first) {
            doc.focus(last);
            Reaction::Handled
        } else if !shift && active == Some(last) {
            doc.focus(first);
            Reaction::Handled
        } else {
            Reaction::Ignored
        }
    }
}
