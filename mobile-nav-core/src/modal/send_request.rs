//! "发送邀请"弹窗

use crate::api::StudentsApi;
use crate::i18n::{fill, Language, Translations};

use super::{log_api_error, user_message, StudentRef};

/// "发送邀请"弹窗
///
/// 提交成功后调用方应关闭弹窗并刷新页面，以显示新的邀请状态。
pub struct RequestModal {
    texts: &'static Translations,
    student: StudentRef,
    message: String,
}

impl RequestModal {
    pub fn open(language: Language, student: StudentRef) -> Self {
        Self {
            texts: language.texts(),
            student,
            message: String::new(),
        }
    }

    pub fn student(&self) -> &StudentRef {
        &self.student
    }

    pub fn title(&self) -> String {
        fill(
            self.texts.modal.send_request.title,
            &[("name", &self.student.name)],
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// 提交邀请；成功返回服务端消息，失败返回给用户看的提示
    pub async fn submit(&self, api: &dyn StudentsApi) -> Result<String, String> {
        log::debug!("Sending invitation to student {}", self.student.id);
        api.send_request(self.student.id, &self.message)
            .await
            .map_err(|e| {
                log_api_error("Failed to send invitation", &e);
                user_message(&e, self.texts, self.texts.modal.send_request.send_failed)
            })
    }
}
