//! 学生管理接口
//!
//! 弹窗流程通过 [`StudentsApi`] 访问服务端，测试中替换为 mock 实现。

mod http;
mod types;

use async_trait::async_trait;

pub use http::HttpStudentsApi;
pub use types::{
    parse_envelope, ApiEnvelope, CategoriesPayload, Category, Empty, RequestStatus,
    ShareCategoryForm, StudentSummary, StudentsPayload,
};

use crate::error::ApiError;

/// 学生管理接口 Trait
#[async_trait]
pub trait StudentsApi: Send + Sync {
    /// 获取当前教师的单词分类
    async fn teacher_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// 搜索可添加的学生
    ///
    /// # Arguments
    /// * `search` - 搜索关键字，空字符串表示全部
    async fn students(&self, search: &str) -> Result<Vec<StudentSummary>, ApiError>;

    /// 把分类分享给学生，返回服务端提示消息
    async fn share_category(
        &self,
        student_id: u64,
        form: &ShareCategoryForm,
    ) -> Result<String, ApiError>;

    /// 向学生发送邀请，返回服务端提示消息
    async fn send_request(&self, student_id: u64, message: &str) -> Result<String, ApiError>;
}
