//! "发送分类"弹窗

use crate::api::{Category, ShareCategoryForm, StudentsApi};
use crate::error::ApiError;
use crate::i18n::{fill, Language, Translations};

use super::{log_api_error, user_message, LoadState, StudentRef};

/// "发送分类"弹窗
pub struct ShareCategoryModal {
    texts: &'static Translations,
    student: StudentRef,
    categories: LoadState<Vec<Category>>,
    selected: Option<u64>,
    message: String,
}

impl ShareCategoryModal {
    /// 为指定学生打开弹窗；学生 ID 缺失（`None` 或 0）时拒绝打开
    pub fn open(language: Language, student_id: Option<u64>, name: &str) -> Result<Self, ApiError> {
        let texts = language.texts();
        let Some(id) = student_id.filter(|id| *id != 0) else {
            log::error!("Share category modal opened without a student id");
            return Err(ApiError::Validation(
                texts.modal.share_category.student_id_missing.to_string(),
            ));
        };
        Ok(Self {
            texts,
            student: StudentRef {
                id,
                name: name.trim().to_string(),
            },
            categories: LoadState::Idle,
            selected: None,
            message: String::new(),
        })
    }

    pub fn student(&self) -> &StudentRef {
        &self.student
    }

    pub fn title(&self) -> String {
        fill(
            self.texts.modal.share_category.title,
            &[("name", &self.student.name)],
        )
    }

    pub fn categories(&self) -> &LoadState<Vec<Category>> {
        &self.categories
    }

    /// 加载教师的分类列表；失败时返回给用户看的提示
    pub async fn load_categories(&mut self, api: &dyn StudentsApi) -> Result<(), String> {
        self.categories = LoadState::Loading;
        match api.teacher_categories().await {
            Ok(categories) => {
                // 之前选中的分类已不存在时清除选择
                if let Some(selected) = self.selected {
                    if !categories.iter().any(|c| c.id == selected) {
                        self.selected = None;
                    }
                }
                self.categories = LoadState::Loaded(categories);
                Ok(())
            }
            Err(e) => {
                log_api_error("Failed to load categories", &e);
                let text = user_message(&e, self.texts, self.texts.modal.share_category.load_failed);
                self.categories = LoadState::Failed(text.clone());
                Err(text)
            }
        }
    }

    /// 下拉框选项：第一项是占位项（值为 `None`）
    pub fn options(&self) -> Vec<(Option<u64>, String)> {
        let texts = &self.texts.modal.share_category;
        let mut options = vec![(None, texts.placeholder.to_string())];
        if let Some(categories) = self.categories.loaded() {
            options.extend(categories.iter().map(|c| {
                let count = c.word_count.to_string();
                (
                    Some(c.id),
                    fill(texts.option, &[("name", &c.name), ("count", &count)]),
                )
            }));
        }
        options
    }

    pub fn select(&mut self, category_id: Option<u64>) {
        self.selected = category_id;
    }

    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// 提交；成功时返回服务端消息，调用方随后关闭弹窗
    pub async fn submit(&self, api: &dyn StudentsApi) -> Result<String, String> {
        let texts = &self.texts.modal.share_category;
        let Some(category) = self.selected else {
            return Err(texts.category_required.to_string());
        };
        let form = ShareCategoryForm {
            category,
            message: self.message.clone(),
        };
        log::debug!(
            "Sharing category {category} with student {}",
            self.student.id
        );
        api.share_category(self.student.id, &form)
            .await
            .map_err(|e| {
                log_api_error("Failed to share category", &e);
                user_message(&e, self.texts, texts.send_failed)
            })
    }
}
