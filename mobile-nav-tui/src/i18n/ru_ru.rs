//! 俄文翻译 (ru-RU)

use super::keys::{CommonTexts, FieldTexts, HelpTexts, HintTexts, PageTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Английская платформа",
        viewport: "{mode} · {width}px",
        desktop: "десктоп",
        mobile: "мобильный",
        loading: "Загрузка...",
        language_changed: "Язык: {language}",
        followed: "Открыто: {href}",
    },
    hints: HintTexts {
        quit: "Выход",
        focus: "Фокус",
        activate: "Открыть",
        close: "Закрыть",
        select: "Выбор",
        share: "Отправить категорию",
        add_students: "Добавить учеников",
        language: "Язык",
        help: "Справка",
        search: "Поиск",
        submit: "Отправить",
        next_field: "Следующее поле",
    },
    pages: PageTexts {
        home: "Главная",
        dictionary: "Словарь",
        tests: "Тесты",
        students: "Ученики",
        log_out: "Выйти",
        greeting: "Привет, {name}!",
        home_body: "С возвращением. Выберите раздел в меню.",
        dictionary_body: "Здесь хранятся ваши категории слов.",
        tests_body: "Тесты по изученным категориям.",
        students_body: "Ваши ученики:",
        no_students: "У вас пока нет учеников.",
        not_found: "Ничего не найдено: {href}",
    },
    fields: FieldTexts {
        category: "Категория",
        message: "Сообщение",
        search: "Поиск",
    },
    help: HelpTexts {
        title: "Справка",
        lines: &[
            ("Tab / Shift+Tab", "Переместить фокус"),
            ("Enter", "Активировать элемент"),
            ("Esc", "Закрыть меню или окно"),
            ("Клик мышью", "Нажатие"),
            ("Перетаскивание влево", "Свайп"),
            ("Колесо мыши", "Прокрутка"),
            ("Alt+a", "Добавить учеников"),
            ("Alt+s", "Отправить категорию выбранному ученику"),
            ("Alt+l", "Сменить язык"),
            ("Ctrl+c / Alt+q", "Выход"),
        ],
    },
};
