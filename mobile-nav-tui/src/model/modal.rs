//! 弹窗状态

use mobile_nav_core::modal::{AddStudentsModal, RequestModal, ShareCategoryModal};

/// "发送分类"弹窗当前焦点所在的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareField {
    #[default]
    Category,
    Message,
}

impl ShareField {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Category => Self::Message,
            Self::Message => Self::Category,
        }
    }
}

/// 当前打开的弹窗
pub enum Modal {
    ShareCategory {
        modal: ShareCategoryModal,
        field: ShareField,
        /// 附言输入框内容
        message: String,
    },
    AddStudents {
        modal: AddStudentsModal,
        /// 选中的学生行；`None` 表示焦点在搜索框
        selected: Option<usize>,
    },
    Request {
        modal: RequestModal,
    },
    Help,
}

/// 弹窗状态
#[derive(Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn open(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
