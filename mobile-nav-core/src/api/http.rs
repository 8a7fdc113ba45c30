//! 基于 reqwest 的接口实现

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use super::types::{
    parse_envelope, CategoriesPayload, Category, Empty, ShareCategoryForm, StudentSummary,
    StudentsPayload,
};
use super::StudentsApi;
use crate::error::ApiError;

const CATEGORIES_PATH: &str = "students/get-teacher-categories/";
const STUDENTS_PATH: &str = "students/get-students-list/";

/// HTTP 接口客户端
///
/// 表单提交会同时带上 `csrfmiddlewaretoken` 字段和 `X-CSRFToken` 头。
pub struct HttpStudentsApi {
    client: Client,
    base_url: Url,
    csrf_token: String,
}

impl HttpStudentsApi {
    pub fn new(base_url: &str, csrf_token: impl Into<String>) -> Result<Self, ApiError> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        // 保证相对路径拼接在基础路径之下
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            client: Client::new(),
            base_url,
            csrf_token: csrf_token.into(),
        })
    }

    /// 拼接接口地址
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    fn share_category_path(student_id: u64) -> String {
        format!("students/share-category/{student_id}/")
    }

    fn send_request_path(student_id: u64) -> String {
        format!("students/send-request/{student_id}/")
    }

    async fn execute<T>(
        &self,
        request: RequestBuilder,
        label: &str,
    ) -> Result<(Option<String>, T), ApiError>
    where
        T: DeserializeOwned,
    {
        log::debug!("[students-api] {label}");
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response body: {e}")))?;

        if !(200..300).contains(&status) {
            log::warn!("[students-api] {label} -> HTTP {status}");
            return Err(ApiError::Status { status, body: text });
        }

        let result = parse_envelope::<T>(&text)?.into_result();
        if let Err(ref e) = result {
            log::warn!("[students-api] {label} rejected: {e}");
        }
        result
    }
}

#[async_trait]
impl StudentsApi for HttpStudentsApi {
    async fn teacher_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.endpoint(CATEGORIES_PATH)?;
        let (_, payload) = self
            .execute::<CategoriesPayload>(self.client.get(url), "GET categories")
            .await?;
        Ok(payload.categories)
    }

    async fn students(&self, search: &str) -> Result<Vec<StudentSummary>, ApiError> {
        let mut url = self.endpoint(STUDENTS_PATH)?;
        url.query_pairs_mut().append_pair("search", search);
        let (_, payload) = self
            .execute::<StudentsPayload>(self.client.get(url), "GET students")
            .await?;
        Ok(payload.students)
    }

    async fn share_category(
        &self,
        student_id: u64,
        form: &ShareCategoryForm,
    ) -> Result<String, ApiError> {
        let url = self.endpoint(&Self::share_category_path(student_id))?;
        let category = form.category.to_string();
        let fields = [
            ("category", category.as_str()),
            ("message", form.message.as_str()),
            ("csrfmiddlewaretoken", self.csrf_token.as_str()),
        ];
        let request = self
            .client
            .post(url)
            .header("X-CSRFToken", self.csrf_token.as_str())
            .form(&fields);
        let (message, _) = self.execute::<Empty>(request, "POST share-category").await?;
        Ok(message.unwrap_or_default())
    }

    async fn send_request(&self, student_id: u64, message: &str) -> Result<String, ApiError> {
        let url = self.endpoint(&Self::send_request_path(student_id))?;
        let fields = [
            ("message", message),
            ("csrfmiddlewaretoken", self.csrf_token.as_str()),
        ];
        let request = self
            .client
            .post(url)
            .header("X-CSRFToken", self.csrf_token.as_str())
            .form(&fields);
        let (message, _) = self.execute::<Empty>(request, "POST send-request").await?;
        Ok(message.unwrap_or_default())
    }
}
