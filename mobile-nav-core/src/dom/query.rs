//! 查询辅助（对应 `querySelector` / `querySelectorAll` 的子集）

use super::{Document, Element, NodeId};

impl Document {
    /// `scope` 的全部后代（先序，不含 `scope` 本身）
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// 第一个满足条件的后代
    pub fn query(&self, scope: NodeId, predicate: impl Fn(&Element) -> bool) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|id| self.element(*id).is_some_and(&predicate))
    }

    /// 全部满足条件的后代（文档顺序）
    pub fn query_all(&self, scope: NodeId, predicate: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| self.element(*id).is_some_and(&predicate))
            .collect()
    }

    /// 第一个带有 `class` 的后代
    pub fn query_class(&self, scope: NodeId, class: &str) -> Option<NodeId> {
        self.query(scope, |el| el.has_class(class))
    }

    /// 全部带有 `class` 的后代
    pub fn query_class_all(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.query_all(scope, |el| el.has_class(class))
    }

    /// `scope` 内可聚焦的后代
    pub fn focusable_within(&self, scope: NodeId) -> Vec<NodeId> {
        self.query_all(scope, Element::is_focusable)
    }

    /// 从 `node` 向上找第一个满足条件的节点（包含自身，对应 `closest`）
    pub fn closest(&self, node: NodeId, predicate: impl Fn(&Element) -> bool) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(id) = current {
            let el = self.element(id)?;
            if predicate(el) {
                return Some(id);
            }
            current = el.parent();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::Document;

    #[test]
    fn descendants_are_in_document_order() {
        let mut doc = Document::new(800);
        let root = doc.root();
        let nav = doc.create_element("nav");
        let first = doc.create_element("a");
        let inner = doc.create_element("span");
        let second = doc.create_element("a");
        doc.append_child(root, nav).unwrap();
        doc.append_child(nav, first).unwrap();
        doc.append_child(first, inner).unwrap();
        doc.append_child(nav, second).unwrap();

        assert_eq!(doc.descendants(root), vec![nav, first, inner, second]);
        assert_eq!(doc.focusable_within(nav), vec![first, second]);
    }

    #[test]
    fn query_class_and_closest() {
        let mut doc = Document::new(800);
        let root = doc.root();
        let nav = doc.create_element("nav");
        doc.element_mut(nav).unwrap().add_class("nav");
        let link = doc.create_element("a");
        doc.element_mut(link).unwrap().add_class("nav-link");
        let icon = doc.create_element("span");
        doc.append_child(root, nav).unwrap();
        doc.append_child(nav, link).unwrap();
        doc.append_child(link, icon).unwrap();

        assert_eq!(doc.query_class(root, "nav"), Some(nav));
        assert_eq!(doc.query_class(nav, "nav"), None);
        assert_eq!(doc.closest(icon, |el| el.has_class("nav-link")), Some(link));
        assert_eq!(doc.closest(icon, |el| el.has_class("missing")), None);
    }
}
