//! "添加学生"弹窗：搜索学生并选择邀请对象

use crate::api::{RequestStatus, StudentSummary, StudentsApi};
use crate::i18n::{fill, Language, Translations};

use super::{log_api_error, LoadState, RequestModal, StudentRef};
use crate::error::ApiError;

/// 学生卡片上的操作按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentAction {
    /// 已是自己的学生（禁用）
    AlreadyStudent,
    /// 邀请待处理（禁用）
    InvitationPending,
    /// 邀请被拒绝或取消，可重新发送
    Resend,
    /// 发送邀请
    Invite,
}

impl StudentAction {
    pub fn for_student(student: &StudentSummary) -> Self {
        if student.is_current_student {
            return Self::AlreadyStudent;
        }
        match (student.has_request, student.request_status) {
            (true, Some(RequestStatus::Pending)) => Self::InvitationPending,
            (true, Some(RequestStatus::Rejected | RequestStatus::Cancelled)) => Self::Resend,
            _ => Self::Invite,
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Resend | Self::Invite)
    }

    pub fn label(self, texts: &Translations) -> &'static str {
        let t = &texts.modal.add_students;
        match self {
            Self::AlreadyStudent => t.already_student,
            Self::InvitationPending => t.invitation_sent,
            Self::Resend => t.resend,
            Self::Invite => t.invite,
        }
    }
}

/// 学生列表的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub student: StudentSummary,
    pub action: StudentAction,
}

impl StudentRow {
    /// 头像占位字母
    pub fn initial(&self) -> String {
        self.student
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// "添加学生"弹窗
pub struct AddStudentsModal {
    language: Language,
    query: String,
    rows: LoadState<Vec<StudentRow>>,
}

impl AddStudentsModal {
    pub fn open(language: Language) -> Self {
        Self {
            language,
            query: String::new(),
            rows: LoadState::Idle,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn rows(&self) -> &LoadState<Vec<StudentRow>> {
        &self.rows
    }

    /// 按当前关键字加载学生列表
    pub async fn search(&mut self, api: &dyn StudentsApi) {
        self.rows = LoadState::Loading;
        let texts = &self.language.texts().modal.add_students;
        self.rows = match api.students(self.query.trim()).await {
            Ok(students) => LoadState::Loaded(
                students
                    .into_iter()
                    .map(|student| StudentRow {
                        action: StudentAction::for_student(&student),
                        student,
                    })
                    .collect(),
            ),
            Err(e) => {
                log_api_error("Failed to load students", &e);
                LoadState::Failed(match e {
                    ApiError::Rejected(reason) => fill(texts.load_error, &[("error", &reason)]),
                    _ => texts.load_failed.to_string(),
                })
            }
        };
    }

    /// 列表区域的状态提示（加载中 / 空 / 错误），有数据时为 `None`
    pub fn status_text(&self) -> Option<String> {
        let texts = &self.language.texts().modal.add_students;
        match &self.rows {
            LoadState::Idle => None,
            LoadState::Loading => Some(texts.loading.to_string()),
            LoadState::Loaded(rows) if rows.is_empty() => Some(texts.empty.to_string()),
            LoadState::Loaded(_) => None,
            LoadState::Failed(message) => Some(message.clone()),
        }
    }

    /// 选择邀请对象：可操作时关闭本弹窗（消费 `self`）并打开邀请弹窗
    pub fn choose(self, student_id: u64) -> Result<RequestModal, Self> {
        let target = self
            .rows
            .loaded()
            .and_then(|rows| rows.iter().find(|r| r.student.id == student_id))
            .filter(|row| row.action.is_enabled())
            .map(|row| StudentRef {
                id: row.student.id,
                name: row.student.name.clone(),
            });
        match target {
            Some(student) => Ok(RequestModal::open(self.language, student)),
            None => Err(self),
        }
    }
}
