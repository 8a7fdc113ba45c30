//! 元素节点定义

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// 节点 ID（文档 arena 中的槽位索引）
///
/// 同一个节点在整个生命周期内 ID 不变，移动节点不会改变它的身份。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// 槽位索引
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 元素节点
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Element {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// 标签名（小写）
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    // ===== class =====

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// 添加 class（已存在时忽略）
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    // ===== 属性 =====

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    // ===== 内联样式 =====

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        self.style.insert(property.to_string(), value.into());
    }

    /// 清除内联样式属性（等价于设为空字符串）
    pub fn clear_style(&mut self, property: &str) {
        self.style.remove(property);
    }

    // ===== 文本 =====

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// 是否可获得键盘焦点
    ///
    /// 匹配 `a, button, input, select, textarea, [tabindex]:not([tabindex="-1"])`。
    pub fn is_focusable(&self) -> bool {
        matches!(
            self.tag.as_str(),
            "a" | "button" | "input" | "select" | "textarea"
        ) || self.attribute("tabindex").is_some_and(|v| v.trim() != "-1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_has_no_duplicates() {
        let mut el = Element::new("div");
        el.add_class("nav-menu");
        el.add_class("nav-menu");
        el.add_class("active");
        assert_eq!(el.classes(), ["nav-menu", "active"]);

        el.remove_class("active");
        assert!(!el.has_class("active"));
    }

    #[test]
    fn tag_is_lowercased() {
        assert_eq!(Element::new("BUTTON").tag(), "button");
    }

    #[test]
    fn focusable_rules() {
        assert!(Element::new("a").is_focusable());
        assert!(Element::new("button").is_focusable());
        assert!(!Element::new("span").is_focusable());

        let mut span = Element::new("span");
        span.set_attribute("tabindex", "0");
        assert!(span.is_focusable());
        span.set_attribute("tabindex", "-1");
        assert!(!span.is_focusable());
    }
}
