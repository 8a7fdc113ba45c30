//! 弹窗视图模型
//!
//! 每个弹窗自己持有它需要的学生 ID / 姓名，弹窗关闭即丢弃，
//! 不存在跨弹窗共享的全局状态。

mod add_students;
mod send_request;
mod share_category;

pub use add_students::{AddStudentsModal, StudentAction, StudentRow};
pub use send_request::RequestModal;
pub use share_category::ShareCategoryModal;

use crate::error::ApiError;
use crate::i18n::{fill, Translations};

/// 弹窗针对的学生
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRef {
    pub id: u64,
    pub name: String,
}

/// 异步加载状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// 把接口错误转成给用户看的提示
///
/// 服务端拒绝时带上服务端给出的原因，本地校验错误原样展示，
/// 网络 / 解析错误统一使用 `fallback`。
pub fn user_message(err: &ApiError, texts: &Translations, fallback: &str) -> String {
    match err {
        ApiError::Rejected(reason) => fill(texts.notify.error_prefix, &[("error", reason)]),
        ApiError::Validation(message) => message.clone(),
        _ => fallback.to_string(),
    }
}

/// 按错误类别记录日志
pub(crate) fn log_api_error(context: &str, err: &ApiError) {
    if err.is_expected() {
        log::warn!("{context}: {err}");
    } else {
        log::error!("{context}: {err}");
    }
}
