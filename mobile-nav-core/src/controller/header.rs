//! 触摸与滚动的附带效果：左滑关闭、按压反馈、页眉阴影

use crate::dom::{Document, NodeId};
use crate::event::Reaction;
use crate::gesture::Point;
use crate::selectors;

use super::{MenuState, ResponsiveNavigationController};

impl ResponsiveNavigationController {
    pub(super) fn handle_touch_end(&mut self, doc: &mut Document, point: Point) -> Reaction {
        let Some(swipe) = self.swipe.touch_end(point) else {
            return Reaction::Ignored;
        };
        if !swipe.is_left(self.config.swipe_threshold_px) {
            return Reaction::Ignored;
        }
        if Self::menu_state(doc) == Some(MenuState::Open) && self.close_menu(doc) {
            log::debug!(
                "Mobile menu closed by swipe (dx={:.0}, dy={:.0})",
                swipe.delta_x,
                swipe.delta_y
            );
            Reaction::Handled
        } else {
            Reaction::Ignored
        }
    }

    /// 触摸按钮或导航链接时缩小一点作为按压反馈
    pub(super) fn press(&mut self, doc: &mut Document, target: Option<NodeId>) {
        self.release_press(doc);
        let Some(target) = target else {
            return;
        };
        let pressable = doc.closest(target, |el| {
            el.has_class(selectors::BTN) || el.has_class(selectors::NAV_LINK)
        });
        if let Some(id) = pressable {
            if let Some(el) = doc.element_mut(id) {
                el.set_style("transform", selectors::PRESS_TRANSFORM);
                self.pressed = Some(id);
            }
        }
    }

    pub(super) fn release_press(&mut self, doc: &mut Document) {
        if let Some(id) = self.pressed.take() {
            if let Some(el) = doc.element_mut(id) {
                el.clear_style("transform");
            }
        }
    }

    /// 滚动超过阈值时给页眉加阴影，否则去掉
    pub fn update_header_shadow(&self, doc: &mut Document) {
        let Some(header) = doc.query_class(doc.root(), selectors::HEADER) else {
            return;
        };
        let scrolled = doc.viewport.scroll_y > self.config.scroll_shadow_threshold_px;
        if let Some(el) = doc.element_mut(header) {
            el.set_style(
                "box-shadow",
                if scrolled { selectors::HEADER_SHADOW } else { "none" },
            );
        }
    }
}
