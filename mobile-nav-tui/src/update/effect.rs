//! 接口任务执行
//!
//! update 层登记的 [`Task`] 在这里通过 [`Backend`] 执行，
//! 结果直接写回 Model：弹窗状态、学生列表和通知。

use std::time::Instant;

use mobile_nav_core::modal::{user_message, LoadState};
use mobile_nav_core::NotificationKind;

use crate::backend::Backend;
use crate::message::Task;
use crate::model::{App, Modal};

/// 执行一个接口任务
pub fn run(app: &mut App, backend: &Backend, task: Task, now: Instant) {
    log::debug!("Running task {task:?}");
    match task {
        Task::LoadStudents => load_students(app, backend),
        Task::LoadCategories => load_categories(app, backend, now),
        Task::ShareCategory => share_category(app, backend, now),
        Task::SearchStudents => search_students(app, backend),
        Task::SendRequest => send_request(app, backend, now),
    }
}

/// 学生页面只列出已是自己学生的人
fn load_students(app: &mut App, backend: &Backend) {
    let texts = app.language().texts();
    app.students = match backend.block_on(backend.api().students("")) {
        Ok(students) => {
            let mine: Vec<_> = students
                .into_iter()
                .filter(|s| s.is_current_student)
                .collect();
            if app.selected_student >= mine.len() {
                app.selected_student = mine.len().saturating_sub(1);
            }
            LoadState::Loaded(mine)
        }
        Err(e) => {
            log::warn!("Failed to load students: {e}");
            let fallback = texts.modal.add_students.load_failed;
            LoadState::Failed(user_message(&e, texts, fallback))
        }
    };
}

fn load_categories(app: &mut App, backend: &Backend, now: Instant) {
    let Some(Modal::ShareCategory { ref mut modal, .. }) = app.modal.active else {
        return;
    };
    if let Err(text) = backend.block_on(modal.load_categories(backend.api())) {
        app.notifications.push(NotificationKind::Error, text, now);
    }
}

fn share_category(app: &mut App, backend: &Backend, now: Instant) {
    let Some(Modal::ShareCategory { ref modal, .. }) = app.modal.active else {
        return;
    };
    match backend.block_on(modal.submit(backend.api())) {
        Ok(message) => {
            app.modal.close();
            app.notifications.push(NotificationKind::Success, message, now);
        }
        // 失败时弹窗保持打开，方便修改后重试
        Err(text) => {
            app.notifications.push(NotificationKind::Error, text, now);
        }
    }
}

fn search_students(app: &mut App, backend: &Backend) {
    let Some(Modal::AddStudents {
        ref mut modal,
        ref mut selected,
    }) = app.modal.active
    else {
        return;
    };
    backend.block_on(modal.search(backend.api()));
    *selected = None;
}

fn send_request(app: &mut App, backend: &Backend, now: Instant) {
    let Some(Modal::Request { ref modal }) = app.modal.active else {
        return;
    };
    match backend.block_on(modal.submit(backend.api())) {
        Ok(message) => {
            app.modal.close();
            app.notifications.push(NotificationKind::Success, message, now);
            // 刷新列表以显示新的邀请状态
            if app.current_page.is_students() {
                app.students = LoadState::Loading;
                app.pending = Some(Task::LoadStudents);
            }
        }
        Err(text) => {
            app.notifications.push(NotificationKind::Error, text, now);
        }
    }
}
