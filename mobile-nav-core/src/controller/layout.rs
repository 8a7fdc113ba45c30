//! 桌面 / 移动端布局切换

use crate::dom::{Document, NodeId};
use crate::error::DomError;
use crate::selectors;

use super::{LayoutMode, MobileElements, ResponsiveNavigationController};

impl ResponsiveNavigationController {
    /// 当前宽度所要求的布局模式（宽度 <= 断点即移动端）
    pub fn required_mode(&self, width: u32) -> LayoutMode {
        if width <= self.config.breakpoint_px {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    /// 从文档结构推断当前布局模式
    pub fn mode(doc: &Document) -> LayoutMode {
        let Some(nav) = Self::find_navigation(doc) else {
            return LayoutMode::Desktop;
        };
        let has_toggle = doc.query_class(nav, selectors::NAV_TOGGLE).is_some();
        let has_menu = doc.query_class(nav, selectors::NAV_MENU).is_some();
        if has_toggle || has_menu {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    /// 移动端模式下的关键节点；任一缺失时返回 `None`
    pub fn mobile_elements(doc: &Document) -> Option<MobileElements> {
        let nav = Self::find_navigation(doc)?;
        Some(MobileElements {
            nav,
            toggle: doc.query_class(nav, selectors::NAV_TOGGLE)?,
            menu: doc.query_class(nav, selectors::NAV_MENU)?,
        })
    }

    /// 按当前视口宽度评估布局，模式不一致时执行切换
    ///
    /// 幂等：同一宽度下重复调用不会改变文档结构。
    pub fn evaluate_layout(&mut self, doc: &mut Document) -> LayoutMode {
        let required = self.required_mode(doc.viewport.width);
        if Self::mode(doc) != required {
            match required {
                LayoutMode::Mobile => {
                    self.enter_mobile_mode(doc);
                }
                LayoutMode::Desktop => {
                    self.exit_mobile_mode(doc);
                }
            }
        }
        Self::mode(doc)
    }

    /// 进入移动端模式
    ///
    /// 创建切换按钮和折叠菜单，把当前所有导航链接、问候语、登录按钮
    /// 按顺序转移进菜单。导航栏不存在或已处于移动端模式时返回 `false`。
    pub fn enter_mobile_mode(&mut self, doc: &mut Document) -> bool {
        let Some(nav) = Self::find_navigation(doc) else {
            log::debug!("enter_mobile_mode skipped: navigation bar not found");
            return false;
        };
        if doc.query_class(nav, selectors::NAV_TOGGLE).is_some() {
            return false;
        }

        match self.build_mobile_menu(doc, nav) {
            Ok(moved) => {
                log::debug!("Entered mobile navigation mode ({moved} entries collapsed)");
                true
            }
            Err(e) => {
                log::error!("Failed to enter mobile navigation mode: {e}");
                false
            }
        }
    }

    fn build_mobile_menu(&self, doc: &mut Document, nav: NodeId) -> Result<usize, DomError> {
        let entries = collapsible_entries(doc, nav);

        let toggle = doc.create_element("button");
        if let Some(el) = doc.element_mut(toggle) {
            el.add_class(selectors::NAV_TOGGLE);
            el.set_attribute("type", "button");
        }
        let menu = doc.create_element("div");
        if let Some(el) = doc.element_mut(menu) {
            el.add_class(selectors::NAV_MENU);
        }
        self.apply_menu_state(doc, toggle, menu, false);

        for entry in &entries {
            // 链接可能嵌套在导航栏内的包装元素中，从它的实际父节点转移
            let from = doc.parent(*entry).ok_or(DomError::NodeNotFound(*entry))?;
            doc.relocate(*entry, from, menu)?;
        }

        doc.append_child(nav, toggle)?;
        doc.append_child(nav, menu)?;
        Ok(entries.len())
    }

    /// 退出移动端模式
    ///
    /// 把菜单中的全部子节点按顺序放回导航栏，再删除切换按钮和菜单。
    /// 没有移动端元素时为 no-op，返回 `false`。
    pub fn exit_mobile_mode(&mut self, doc: &mut Document) -> bool {
        let Some(nav) = Self::find_navigation(doc) else {
            log::debug!("exit_mobile_mode skipped: navigation bar not found");
            return false;
        };
        let toggle = doc.query_class(nav, selectors::NAV_TOGGLE);
        let menu = doc.query_class(nav, selectors::NAV_MENU);
        if toggle.is_none() && menu.is_none() {
            return false;
        }

        let result = restore_desktop(doc, nav, toggle, menu);

        match result {
            Ok(restored) => {
                log::debug!("Exited mobile navigation mode ({restored} entries restored)");
                true
            }
            Err(e) => {
                log::error!("Failed to exit mobile navigation mode: {e}");
                false
            }
        }
    }
}

/// 把菜单子节点放回导航栏并删除移动端元素，返回放回的节点数
fn restore_desktop(
    doc: &mut Document,
    nav: NodeId,
    toggle: Option<NodeId>,
    menu: Option<NodeId>,
) -> Result<usize, DomError> {
    let mut restored = 0;
    if let Some(menu) = menu {
        let children = doc.children(menu).to_vec();
        for child in children {
            doc.relocate(child, menu, nav)?;
            restored += 1;
        }
        doc.remove(menu)?;
    }
    if let Some(toggle) = toggle {
        doc.remove(toggle)?;
    }
    Ok(restored)
}

/// 需要折叠进菜单的节点：导航链接、问候语和登录按钮，按文档顺序
fn collapsible_entries(doc: &Document, nav: NodeId) -> Vec<NodeId> {
    let mut entries = doc.query_all(nav, |el| {
        el.has_class(selectors::NAV_LINK)
            || el.has_class(selectors::USER_GREETING)
            || el.has_class(selectors::BTN_LOGIN)
    });
    // 外层条目会连同子树一起转移，内层的重复条目不再单独处理
    let snapshot = entries.clone();
    entries.retain(|id| {
        !snapshot
            .iter()
            .any(|other| other != id && doc.contains(*other, *id))
    });
    entries
}
