//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::api::{Category, ShareCategoryForm, StudentSummary, StudentsApi};
use crate::dom::{Document, NodeId};
use crate::error::ApiError;

// ===== 文档夹具 =====

/// 典型页面：页眉里的导航栏 + 正文
pub struct NavFixture {
    pub doc: Document,
    pub header: NodeId,
    pub nav: NodeId,
    pub links: Vec<NodeId>,
    pub greeting: NodeId,
    pub login: NodeId,
    /// 导航栏之外的正文段落
    pub outside: NodeId,
    /// 导航栏之外的链接
    pub outside_link: NodeId,
}

fn el(doc: &mut Document, parent: NodeId, tag: &str, classes: &[&str], text: &str) -> NodeId {
    let id = doc.create_element(tag);
    let element = doc.element_mut(id).unwrap();
    for class in classes {
        element.add_class(class);
    }
    element.set_text(text);
    doc.append_child(parent, id).unwrap();
    id
}

fn link(doc: &mut Document, parent: NodeId, classes: &[&str], text: &str, href: &str) -> NodeId {
    let id = el(doc, parent, "a", classes, text);
    doc.element_mut(id).unwrap().set_attribute("href", href);
    id
}

/// 构建夹具页面
pub fn nav_fixture(width: u32) -> NavFixture {
    let mut doc = Document::new(width);
    let root = doc.root();

    let header = el(&mut doc, root, "header", &["header"], "");
    let nav = el(&mut doc, header, "nav", &["nav"], "");
    let links = vec![
        link(&mut doc, nav, &["nav-link"], "Home", "/"),
        link(&mut doc, nav, &["nav-link"], "Dictionary", "/dictionary/"),
        link(&mut doc, nav, &["nav-link"], "Tests", "/tests/"),
    ];
    let greeting = el(&mut doc, nav, "span", &["user-greeting"], "Hello, Anna");
    let login = link(&mut doc, nav, &["btn", "btn-login"], "Log out", "/logout/");

    let main = el(&mut doc, root, "main", &[], "");
    let outside = el(&mut doc, main, "p", &[], "Lesson of the day");
    let outside_link = link(&mut doc, main, &[], "Games", "/games/");

    NavFixture {
        doc,
        header,
        nav,
        links,
        greeting,
        login,
        outside,
        outside_link,
    }
}

/// 测试用学生
pub fn student(id: u64, name: &str) -> StudentSummary {
    StudentSummary {
        id,
        name: name.to_string(),
        email: format!("{}@school.test", name.to_lowercase()),
        has_request: false,
        request_status: None,
        is_current_student: false,
    }
}

// ===== MockStudentsApi =====

#[derive(Default)]
pub struct MockStudentsApi {
    categories: Vec<Category>,
    students: Vec<StudentSummary>,
    /// 如果 Some，所有调用都返回此错误
    failure: Option<ApiError>,
    searches: Mutex<Vec<String>>,
    shared: Mutex<Vec<(u64, ShareCategoryForm)>>,
    requests: Mutex<Vec<(u64, String)>>,
}

impl MockStudentsApi {
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories,
            ..Self::default()
        }
    }

    pub fn with_students(students: Vec<StudentSummary>) -> Self {
        Self {
            students,
            ..Self::default()
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), ApiError> {
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    pub async fn searches(&self) -> Vec<String> {
        self.searches.lock().await.clone()
    }

    pub async fn shared(&self) -> Vec<(u64, ShareCategoryForm)> {
        self.shared.lock().await.clone()
    }

    pub async fn requests(&self) -> Vec<(u64, String)> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl StudentsApi for MockStudentsApi {
    async fn teacher_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.check()?;
        Ok(self.categories.clone())
    }

    async fn students(&self, search: &str) -> Result<Vec<StudentSummary>, ApiError> {
        self.searches.lock().await.push(search.to_string());
        self.check()?;
        Ok(self.students.clone())
    }

    async fn share_category(
        &self,
        student_id: u64,
        form: &ShareCategoryForm,
    ) -> Result<String, ApiError> {
        self.check()?;
        self.shared.lock().await.push((student_id, form.clone()));
        Ok("Category shared".to_string())
    }

    async fn send_request(&self, student_id: u64, message: &str) -> Result<String, ApiError> {
        self.check()?;
        self.requests
            .lock()
            .await
            .push((student_id, message.to_string()));
        Ok("Invitation sent".to_string())
    }
}
