//! 控制器接收的输入事件与处理结果

use crate::dom::NodeId;
use crate::gesture::Point;

/// 按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Enter,
    Other,
}

/// 输入事件
///
/// 宿主（浏览器绑定、终端界面、测试）把原始输入翻译成这些事件，
/// 交给 [`crate::ResponsiveNavigationController::dispatch`]。
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// 视口宽度变化
    Resize { width: u32 },
    /// 点击；`target` 为 `None` 表示点在任何元素之外
    Click { target: Option<NodeId> },
    /// 按键按下
    KeyDown { key: Key, shift: bool },
    /// 触摸开始
    TouchStart { point: Point, target: Option<NodeId> },
    /// 触摸结束
    TouchEnd { point: Point, target: Option<NodeId> },
    /// 页面滚动
    Scroll { offset: f64 },
    /// 动画帧回调
    AnimationFrame,
}

/// 事件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// 控制器未处理，宿主应执行默认行为
    Ignored,
    /// 已处理（等价于 `preventDefault`）
    Handled,
    /// 导航链接被激活：菜单已关闭，宿主应跳转到 `href`
    FollowLink { href: String },
}

impl Reaction {
    pub fn is_handled(&self) -> bool {
        !matches!(self, Reaction::Ignored)
    }
}
