//! 俄文翻译 (ru-RU)

use super::keys::{
    AddStudentsTexts, ModalTexts, NavTexts, NotifyTexts, SendRequestTexts, ShareCategoryTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    nav: NavTexts {
        open_menu: "Открыть меню",
        close_menu: "Закрыть меню",
    },
    modal: ModalTexts {
        share_category: ShareCategoryTexts {
            title: "Отправить категорию: {name}",
            placeholder: "Выберите категорию...",
            option: "{name} ({count} слов)",
            category_required: "Выберите категорию",
            student_id_missing: "Ошибка: ID студента не определен",
            load_failed: "Ошибка загрузки категорий",
            send_failed: "Произошла ошибка при отправке категории",
        },
        add_students: AddStudentsTexts {
            title: "Добавить учеников",
            loading: "Загрузка учеников...",
            empty: "Ученики не найдены",
            load_error: "Ошибка загрузки: {error}",
            load_failed: "Произошла ошибка при загрузке",
            already_student: "Уже ученик",
            invitation_sent: "Приглашение отправлено",
            resend: "Отправить повторно",
            invite: "Пригласить",
        },
        send_request: SendRequestTexts {
            title: "Пригласить: {name}",
            send_failed: "Произошла ошибка при отправке приглашения",
        },
    },
    notify: NotifyTexts {
        error_prefix: "Ошибка: {error}",
    },
};
