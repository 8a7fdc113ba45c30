//! 内置演示数据
//!
//! 未配置学生接口地址时使用，让界面可以离线操作。

use async_trait::async_trait;
use mobile_nav_core::api::{Category, RequestStatus, ShareCategoryForm, StudentSummary, StudentsApi};
use mobile_nav_core::ApiError;
use tokio::sync::Mutex;

/// 演示用学生接口
pub struct DemoStudentsApi {
    categories: Vec<Category>,
    students: Mutex<Vec<StudentSummary>>,
}

fn demo_student(
    id: u64,
    name: &str,
    is_current_student: bool,
    request_status: Option<RequestStatus>,
) -> StudentSummary {
    StudentSummary {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.split(' ').next().unwrap_or(name).to_lowercase()),
        has_request: request_status.is_some(),
        request_status,
        is_current_student,
    }
}

impl DemoStudentsApi {
    pub fn new() -> Self {
        Self {
            categories: vec![
                Category {
                    id: 1,
                    name: "Travel".to_string(),
                    word_count: 24,
                },
                Category {
                    id: 2,
                    name: "Irregular verbs".to_string(),
                    word_count: 110,
                },
                Category {
                    id: 3,
                    name: "Business English".to_string(),
                    word_count: 57,
                },
            ],
            students: Mutex::new(vec![
                demo_student(1, "Anna Petrova", true, None),
                demo_student(2, "Ivan Smirnov", true, None),
                demo_student(3, "Maria Ivanova", false, Some(RequestStatus::Pending)),
                demo_student(4, "Oleg Kuznetsov", false, Some(RequestStatus::Rejected)),
                demo_student(5, "Elena Sokolova", false, None),
                demo_student(6, "Pavel Orlov", false, None),
            ]),
        }
    }
}

impl Default for DemoStudentsApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentsApi for DemoStudentsApi {
    async fn teacher_categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(self.categories.clone())
    }

    async fn students(&self, search: &str) -> Result<Vec<StudentSummary>, ApiError> {
        let needle = search.to_lowercase();
        let students = self.students.lock().await;
        Ok(students
            .iter()
            .filter(|s| {
                needle.is_empty()
                    || s.name.to_lowercase().contains(&needle)
                    || s.email.contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn share_category(
        &self,
        student_id: u64,
        form: &ShareCategoryForm,
    ) -> Result<String, ApiError> {
        let Some(category) = self.categories.iter().find(|c| c.id == form.category) else {
            return Err(ApiError::Rejected("Category not found".to_string()));
        };
        let students = self.students.lock().await;
        match students.iter().find(|s| s.id == student_id) {
            Some(student) if student.is_current_student => Ok(format!(
                "Category \"{}\" sent to {}",
                category.name, student.name
            )),
            Some(_) => Err(ApiError::Rejected("This is not your student".to_string())),
            None => Err(ApiError::Rejected("Student not found".to_string())),
        }
    }

    async fn send_request(&self, student_id: u64, _message: &str) -> Result<String, ApiError> {
        let mut students = self.students.lock().await;
        let Some(student) = students.iter_mut().find(|s| s.id == student_id) else {
            return Err(ApiError::Rejected("Student not found".to_string()));
        };
        if student.is_current_student {
            return Err(ApiError::Rejected("Already your student".to_string()));
        }
        if student.request_status == Some(RequestStatus::Pending) {
            return Err(ApiError::Rejected("Invitation already sent".to_string()));
        }
        student.has_request = true;
        student.request_status = Some(RequestStatus::Pending);
        Ok(format!("Invitation sent to {}", student.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread().build().unwrap()
    }

    #[test]
    fn search_filters_by_name() {
        let api = DemoStudentsApi::new();
        let found = runtime().block_on(api.students("ANNA")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn invitation_becomes_pending() {
        let api = DemoStudentsApi::new();
        let rt = runtime();
        assert!(rt.block_on(api.send_request(5, "hi")).is_ok());
        assert!(matches!(
            rt.block_on(api.send_request(5, "hi")),
            Err(ApiError::Rejected(_))
        ));
        let students = rt.block_on(api.students("elena")).unwrap();
        assert_eq!(students[0].request_status, Some(RequestStatus::Pending));
    }

    #[test]
    fn share_requires_own_student() {
        let api = DemoStudentsApi::new();
        let rt = runtime();
        let form = ShareCategoryForm {
            category: 2,
            message: String::new(),
        };
        assert!(rt.block_on(api.share_category(1, &form)).is_ok());
        assert!(rt.block_on(api.share_category(5, &form)).is_err());
    }
}
