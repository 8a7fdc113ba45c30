//! 虚拟文档
//!
//! 导航控制器操作的最小 DOM 模型：元素 arena + 父子关系 + 焦点 + 视口。
//!
//! 所有"移动节点"的操作都经过 [`Document::relocate`]，
//! 节点只会被转移、不会被克隆，因此同一个链接不会重复或丢失。

mod element;
mod query;

pub use element::{Element, NodeId};

use crate::error::DomError;

/// 视口状态
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// 视口宽度（逻辑像素）
    pub width: u32,
    /// 垂直滚动偏移（逻辑像素）
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            scroll_y: 0.0,
        }
    }
}

/// 虚拟文档
#[derive(Debug, Clone)]
pub struct Document {
    /// 节点槽位，`None` 表示已删除
    nodes: Vec<Option<Element>>,
    root: NodeId,
    focused: Option<NodeId>,
    /// 视口
    pub viewport: Viewport,
}

impl Document {
    /// 创建只含 `<body>` 根节点的文档
    pub fn new(viewport_width: u32) -> Self {
        Self {
            nodes: vec![Some(Element::new("body"))],
            root: NodeId(0),
            focused: None,
            viewport: Viewport::new(viewport_width),
        }
    }

    /// 根节点（`<body>`）
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// 创建一个游离元素（尚未挂到任何父节点上）
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Some(Element::new(tag)));
        NodeId(self.nodes.len() - 1)
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    fn require(&self, id: NodeId) -> Result<&Element, DomError> {
        self.element(id).ok_or(DomError::NodeNotFound(id))
    }

    fn require_mut(&mut self, id: NodeId) -> Result<&mut Element, DomError> {
        self.element_mut(id).ok_or(DomError::NodeNotFound(id))
    }

    /// 节点是否仍存在
    pub fn exists(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.element(id).and_then(Element::parent)
    }

    /// 子节点列表（节点不存在时为空）
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.element(id).map_or(&[], Element::children)
    }

    /// `ancestor` 是否包含 `node`（包含自身，与 DOM `contains` 一致）
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// 节点当前是否挂在文档树上
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.exists(id) && self.contains(self.root, id)
    }

    /// 把 `child` 追加为 `parent` 的最后一个子节点
    ///
    /// 与 DOM `appendChild` 一致：若 `child` 已有父节点，先从原位置摘下。
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.require(parent)?;
        self.require(child)?;
        if child == self.root {
            return Err(DomError::DetachRoot);
        }
        if self.contains(child, parent) {
            return Err(DomError::Cycle {
                node: child,
                target: parent,
            });
        }

        self.detach(child)?;
        self.require_mut(parent)?.children.push(child);
        self.require_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// 把 `node` 从 `from` 转移到 `to` 的末尾
    ///
    /// 唯一的节点搬移入口。`node` 必须是 `from` 的直接子节点，
    /// 否则返回 [`DomError::NotAChild`] 且文档保持不变。
    pub fn relocate(&mut self, node: NodeId, from: NodeId, to: NodeId) -> Result<(), DomError> {
        self.require(from)?;
        self.require(to)?;
        if self.require(node)?.parent != Some(from) {
            return Err(DomError::NotAChild { node, parent: from });
        }
        self.append_child(to, node)
    }

    /// 从文档中删除节点及其整个子树
    pub fn remove(&mut self, id: NodeId) -> Result<(), DomError> {
        if id == self.root {
            return Err(DomError::DetachRoot);
        }
        self.require(id)?;
        self.detach(id)?;

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(element) = self.nodes.get_mut(current.0).and_then(Option::take) {
                stack.extend(element.children);
            }
            if self.focused == Some(current) {
                self.focused = None;
            }
        }
        Ok(())
    }

    /// 从父节点摘下（节点本身保留）
    fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        let Some(parent) = self.require(id)?.parent else {
            return Ok(());
        };
        if let Some(parent_el) = self.element_mut(parent) {
            parent_el.children.retain(|c| *c != id);
        }
        self.require_mut(id)?.parent = None;
        Ok(())
    }

    // ===== 焦点 =====

    /// 当前焦点元素
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    /// 把焦点移到 `id`，不可聚焦或未挂载的节点会被忽略
    pub fn focus(&mut self, id: NodeId) -> bool {
        let focusable = self.element(id).is_some_and(Element::is_focusable);
        if focusable && self.is_connected(id) {
            self.focused = Some(id);
            true
        } else {
            false
        }
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }
}
