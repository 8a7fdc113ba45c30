//! 英文翻译 (en-US)

use super::keys::{
    AddStudentsTexts, ModalTexts, NavTexts, NotifyTexts, SendRequestTexts, ShareCategoryTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    nav: NavTexts {
        open_menu: "open menu",
        close_menu: "close menu",
    },
    modal: ModalTexts {
        share_category: ShareCategoryTexts {
            title: "Share category: {name}",
            placeholder: "Choose a category...",
            option: "{name} ({count} words)",
            category_required: "Choose a category",
            student_id_missing: "Error: student ID is not defined",
            load_failed: "Failed to load categories",
            send_failed: "An error occurred while sending the category",
        },
        add_students: AddStudentsTexts {
            title: "Add students",
            loading: "Loading students...",
            empty: "No students found",
            load_error: "Loading error: {error}",
            load_failed: "An error occurred while loading",
            already_student: "Already a student",
            invitation_sent: "Invitation sent",
            resend: "Send again",
            invite: "Invite",
        },
        send_request: SendRequestTexts {
            title: "Invite {name}",
            send_failed: "An error occurred while sending the invitation",
        },
    },
    notify: NotifyTexts {
        error_prefix: "Error: {error}",
    },
};
