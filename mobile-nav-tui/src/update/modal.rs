//! 弹窗更新逻辑

use std::time::Instant;

use mobile_nav_core::modal::{user_message, AddStudentsModal, ShareCategoryModal};
use mobile_nav_core::NotificationKind;

use crate::message::{ModalMessage, Task};
use crate::model::{App, Modal, ShareField};

/// 打开"发送分类"弹窗，对象是学生页面选中的学生
pub fn open_share_category(app: &mut App, now: Instant) {
    let language = app.language();
    let (id, name) = app
        .selected_student()
        .map_or((None, String::new()), |s| (Some(s.id), s.name.clone()));

    match ShareCategoryModal::open(language, id, &name) {
        Ok(modal) => {
            app.modal.open(Modal::ShareCategory {
                modal,
                field: ShareField::Category,
                message: String::new(),
            });
            app.pending = Some(Task::LoadCategories);
        }
        Err(e) => {
            let texts = language.texts();
            let text = user_message(&e, texts, texts.modal.share_category.load_failed);
            app.notifications.push(NotificationKind::Error, text, now);
        }
    }
}

/// 打开"添加学生"弹窗，并立即加载全部学生
pub fn open_add_students(app: &mut App) {
    app.modal.open(Modal::AddStudents {
        modal: AddStudentsModal::open(app.language()),
        selected: None,
    });
    app.pending = Some(Task::SearchStudents);
}

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ShareCategory { .. } => handle_share_category(app, msg),
        Modal::AddStudents { .. } => handle_add_students(app, msg),
        Modal::Request { .. } => handle_request(app, msg),
        Modal::Help => handle_simple_modal(app, msg),
    }
}

/// 处理"发送分类"弹窗
fn handle_share_category(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ShareCategory {
        ref mut modal,
        ref mut field,
        ref mut message,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField | ModalMessage::PrevField => {
            *field = field.toggle();
        }

        ModalMessage::Up | ModalMessage::Down if *field == ShareField::Category => {
            let options = modal.options();
            let current = options
                .iter()
                .position(|(id, _)| *id == modal.selected())
                .unwrap_or(0);
            let len = options.len();
            let next = if msg == ModalMessage::Down {
                (current + 1) % len
            } else {
                (current + len - 1) % len
            };
            modal.select(options[next].0);
        }

        ModalMessage::Input(c) if *field == ShareField::Message => {
            message.push(c);
            modal.set_message(message.clone());
        }

        ModalMessage::Backspace if *field == ShareField::Message => {
            message.pop();
            modal.set_message(message.clone());
        }

        ModalMessage::Confirm => {
            // 分类还在加载时不提交
            if !modal.categories().is_loading() {
                app.pending = Some(Task::ShareCategory);
            }
        }

        _ => {}
    }
}

/// 处理"添加学生"弹窗
fn handle_add_students(app: &mut App, msg: ModalMessage) {
    let Some(Modal::AddStudents {
        ref mut modal,
        ref mut selected,
    }) = app.modal.active
    else {
        return;
    };
    let row_count = modal.rows().loaded().map_or(0, Vec::len);

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::Input(c) => {
            let mut query = modal.query().to_string();
            query.push(c);
            modal.set_query(query);
            *selected = None;
        }

        ModalMessage::Backspace => {
            let mut query = modal.query().to_string();
            query.pop();
            modal.set_query(query);
            *selected = None;
        }

        ModalMessage::Down | ModalMessage::NextField => {
            if row_count > 0 {
                *selected = Some(selected.map_or(0, |i| (i + 1).min(row_count - 1)));
            }
        }

        ModalMessage::Up | ModalMessage::PrevField => {
            // 第一行再往上回到搜索框
            *selected = match *selected {
                Some(0) | None => None,
                Some(i) => Some(i - 1),
            };
        }

        ModalMessage::Confirm => {
            let Some(index) = *selected else {
                app.pending = Some(Task::SearchStudents);
                return;
            };
            let Some(student_id) = modal
                .rows()
                .loaded()
                .and_then(|rows| rows.get(index))
                .map(|row| row.student.id)
            else {
                return;
            };
            let Some(Modal::AddStudents { modal, selected }) = app.modal.active.take() else {
                return;
            };
            match modal.choose(student_id) {
                Ok(request) => app.modal.open(Modal::Request { modal: request }),
                // 不可操作的学生：保持弹窗不变
                Err(modal) => app.modal.open(Modal::AddStudents { modal, selected }),
            }
        }
    }
}

/// 处理"发送邀请"弹窗
fn handle_request(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Request { ref mut modal }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::Input(c) => {
            let mut message = modal.message().to_string();
            message.push(c);
            modal.set_message(message);
        }

        ModalMessage::Backspace => {
            let mut message = modal.message().to_string();
            message.pop();
            modal.set_message(message);
        }

        ModalMessage::Confirm => {
            app.pending = Some(Task::SendRequest);
        }

        _ => {}
    }
}

/// 处理只读弹窗（帮助）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}
