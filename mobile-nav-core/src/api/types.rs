//! 接口数据类型

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// 教师的单词分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub word_count: u32,
}

/// 邀请状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// 可添加的学生
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub has_request: bool,
    #[serde(default)]
    pub request_status: Option<RequestStatus>,
    #[serde(default)]
    pub is_current_student: bool,
}

/// 分享分类的表单
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareCategoryForm {
    pub category: u64,
    pub message: String,
}

/// 服务端统一响应格式：`{success, message?, error?, ...payload}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> ApiEnvelope<T> {
    /// `success: false` 转为 [`ApiError::Rejected`]
    pub fn into_result(self) -> Result<(Option<String>, T), ApiError> {
        if self.success {
            Ok((self.message, self.payload))
        } else {
            Err(ApiError::Rejected(
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }
}

/// 分类列表负载
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoriesPayload {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// 学生列表负载
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentsPayload {
    #[serde(default)]
    pub students: Vec<StudentSummary>,
}

/// 无额外负载
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Empty {}

/// 解析 JSON 响应
pub fn parse_envelope<T>(text: &str) -> Result<ApiEnvelope<T>, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(text).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        ApiError::Parse(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_response() {
        let text = r#"{"success": true, "categories": [{"id": 3, "name": "Animals", "word_count": 12}]}"#;
        let (_, payload) = parse_envelope::<CategoriesPayload>(text)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(
            payload.categories,
            vec![Category {
                id: 3,
                name: "Animals".into(),
                word_count: 12
            }]
        );
    }

    #[test]
    fn rejected_response_carries_server_error() {
        let text = r#"{"success": false, "error": "Teachers only"}"#;
        let err = parse_envelope::<StudentsPayload>(text)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(err, ApiError::Rejected("Teachers only".into()));
    }

    #[test]
    fn student_status_variants() {
        let text = r#"{"success": true, "students": [
            {"id": 1, "name": "Ann", "email": "a@x", "has_request": true, "request_status": "pending", "is_current_student": false},
            {"id": 2, "name": "Bob", "email": "b@x", "has_request": false, "request_status": null, "is_current_student": true},
            {"id": 3, "name": "Cy", "email": "c@x", "has_request": true, "request_status": "archived", "is_current_student": false}
        ]}"#;
        let (_, payload) = parse_envelope::<StudentsPayload>(text)
            .unwrap()
            .into_result()
            .unwrap();
        let statuses: Vec<_> = payload.students.iter().map(|s| s.request_status).collect();
        assert_eq!(
            statuses,
            vec![Some(RequestStatus::Pending), None, Some(RequestStatus::Unknown)]
        );
    }

    #[test]
    fn non_json_is_parse_error() {
        let err = parse_envelope::<Empty>("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
