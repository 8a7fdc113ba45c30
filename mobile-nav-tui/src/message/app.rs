//! 应用级消息

use super::{ContentMessage, ModalMessage, NavigationMessage};

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 终端窗口大小变化
    Resize { columns: u16, rows: u16 },

    /// 导航栏相关消息（交给导航控制器）
    Navigation(NavigationMessage),

    /// 正文相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 打开"发送分类"弹窗（针对学生页面选中的学生）
    OpenShareCategory,

    /// 打开"添加学生"弹窗
    OpenAddStudents,

    /// 循环切换界面语言
    CycleLanguage,

    /// 显示帮助
    ShowHelp,

    /// 主循环每一轮：到期的防抖、动画帧、通知过期
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
