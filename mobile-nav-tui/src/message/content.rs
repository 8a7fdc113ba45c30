//! 正文消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    /// 滚动正文（正数向下）
    Scroll(i16),
    /// 学生列表选择上一行
    SelectPrev,
    /// 学生列表选择下一行
    SelectNext,
}
