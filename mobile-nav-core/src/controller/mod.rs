//! 响应式导航控制器
//!
//! 负责让导航栏的 DOM 结构与视口宽度保持一致，并提供折叠菜单的交互。
//!
//! ## 生命周期
//!
//! ```text
//! attach()  ── 首次布局评估，控制器开始接收事件
//!    │
//!    ├─ dispatch(event)   唯一的输入入口（点击 / 按键 / 触摸 / 滚动 / resize）
//!    ├─ poll(now)         到期的 resize 防抖在这里触发布局评估
//!    │
//! detach()  ── 取消计时，恢复桌面布局
//! ```
//!
//! 控制器不持有文档，每次调用都借用宿主的 [`Document`]，
//! 因此多个控制器可以各自驱动自己的文档。

mod header;
mod layout;
mod menu;

use std::time::Instant;

use crate::config::NavConfig;
use crate::dom::{Document, NodeId};
use crate::event::{Key, NavEvent, Reaction};
use crate::gesture::SwipeTracker;
use crate::i18n::NavTexts;
use crate::selectors;
use crate::timing::{Debouncer, FrameThrottle};

/// 布局模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 链接直接排列在导航栏中
    Desktop,
    /// 链接折叠到切换按钮后面的菜单中
    Mobile,
}

/// 折叠菜单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

/// 移动端模式下导航栏里的三个关键节点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileElements {
    pub nav: NodeId,
    pub toggle: NodeId,
    pub menu: NodeId,
}

/// 响应式导航控制器
pub struct ResponsiveNavigationController {
    config: NavConfig,
    labels: &'static NavTexts,
    resize: Debouncer,
    scroll: FrameThrottle,
    swipe: SwipeTracker,
    /// 当前处于按压反馈状态的元素
    pressed: Option<NodeId>,
}

impl ResponsiveNavigationController {
    /// 创建控制器并立即按当前视口宽度评估一次布局
    pub fn attach(config: NavConfig, doc: &mut Document) -> Self {
        let labels = &config.language.texts().nav;
        let resize = Debouncer::new(config.resize_debounce());
        let mut controller = Self {
            config,
            labels,
            resize,
            scroll: FrameThrottle::new(),
            swipe: SwipeTracker::new(),
            pressed: None,
        };
        let mode = controller.evaluate_layout(doc);
        log::debug!(
            "Navigation controller attached (width={}, mode={mode:?})",
            doc.viewport.width
        );
        controller
    }

    /// 拆除控制器：取消等待中的防抖，恢复桌面布局
    pub fn detach(mut self, doc: &mut Document) {
        self.resize.cancel();
        self.release_press(doc);
        self.exit_mobile_mode(doc);
        log::debug!("Navigation controller detached");
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// 事件分发（控制器唯一的输入入口）
    pub fn dispatch(&mut self, doc: &mut Document, event: NavEvent, now: Instant) -> Reaction {
        match event {
            NavEvent::Resize { width } => {
                doc.viewport.width = width;
                self.resize.trigger(now);
                Reaction::Ignored
            }
            NavEvent::Click { target } => self.handle_click(doc, target),
            NavEvent::KeyDown { key, shift } => self.handle_key(doc, key, shift),
            NavEvent::TouchStart { point, target } => {
                self.swipe.touch_start(point);
                self.press(doc, target);
                Reaction::Ignored
            }
            NavEvent::TouchEnd { point, .. } => {
                self.release_press(doc);
                self.handle_touch_end(doc, point)
            }
            NavEvent::Scroll { offset } => {
                doc.viewport.scroll_y = offset;
                self.scroll.request();
                Reaction::Ignored
            }
            NavEvent::AnimationFrame => {
                if self.scroll.take_frame() {
                    self.update_header_shadow(doc);
                    Reaction::Handled
                } else {
                    Reaction::Ignored
                }
            }
        }
    }

    /// 处理到期的计时任务；返回本次是否执行了布局评估
    pub fn poll(&mut self, doc: &mut Document, now: Instant) -> bool {
        if self.resize.fire_if_due(now) {
            self.evaluate_layout(doc);
            true
        } else {
            false
        }
    }

    /// 下一次需要调用 [`Self::poll`] 的时刻
    pub fn next_deadline(&self) -> Option<Instant> {
        self.resize.deadline()
    }

    /// 是否有等待中的动画帧工作
    pub fn wants_animation_frame(&self) -> bool {
        self.scroll.is_pending()
    }

    /// 定位导航栏：class `nav` 或 `role="navigation"` 的第一个元素
    pub fn find_navigation(doc: &Document) -> Option<NodeId> {
        doc.query(doc.root(), |el| {
            el.has_class(selectors::NAV) || el.attribute("role") == Some(selectors::NAVIGATION_ROLE)
        })
    }

    fn handle_click(&mut self, doc: &mut Document, target: Option<NodeId>) -> Reaction {
        if let Some(target) = target {
            let on_toggle = doc
                .closest(target, |el| el.has_class(selectors::NAV_TOGGLE))
                .is_some();
            if on_toggle {
                self.toggle_menu(doc);
                return Reaction::Handled;
            }

            let link = doc.closest(target, |el| el.tag() == "a" && el.attribute("href").is_some());
            if let Some(href) = link
                .and_then(|id| doc.element(id))
                .and_then(|el| el.attribute("href"))
                .map(str::to_string)
            {
                self.close_menu(doc);
                return Reaction::FollowLink { href };
            }
        }

        let Some(nav) = Self::find_navigation(doc) else {
            log::debug!("Outside click ignored: navigation bar not found");
            return Reaction::Ignored;
        };
        let inside = target.is_some_and(|t| doc.contains(nav, t));
        if !inside && self.close_menu(doc) {
            return Reaction::Handled;
        }
        Reaction::Ignored
    }

    fn handle_key(&mut self, doc: &mut Document, key: Key, shift: bool) -> Reaction {
        match key {
            Key::Escape => {
                if self.close_menu(doc) {
                    Reaction::Handled
                } else {
                    Reaction::Ignored
                }
            }
            Key::Tab => self.wrap_focus(doc, shift),
            Key::Enter | Key::Other => Reaction::Ignored,
        }
    }
}

#[cfg(test)]
mod tests;
