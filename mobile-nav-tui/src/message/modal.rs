//! 弹窗消息

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,
    /// 下一个字段
    NextField,
    /// 上一个字段
    PrevField,
    /// 上一个选项 / 上一行
    Up,
    /// 下一个选项 / 下一行
    Down,
    /// 确认（搜索 / 选择 / 提交）
    Confirm,
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
}
