//! 英文翻译 (en-US)

use super::keys::{CommonTexts, FieldTexts, HelpTexts, HintTexts, PageTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "English Platform",
        viewport: "{mode} · {width}px",
        desktop: "desktop",
        mobile: "mobile",
        loading: "Loading...",
        language_changed: "Language: {language}",
        followed: "Opened {href}",
    },
    hints: HintTexts {
        quit: "Quit",
        focus: "Focus",
        activate: "Open",
        close: "Close",
        select: "Select",
        share: "Share category",
        add_students: "Add students",
        language: "Language",
        help: "Help",
        search: "Search",
        submit: "Send",
        next_field: "Next field",
    },
    pages: PageTexts {
        home: "Home",
        dictionary: "Dictionary",
        tests: "Tests",
        students: "Students",
        log_out: "Log out",
        greeting: "Hello, {name}!",
        home_body: "Welcome back. Pick a section from the navigation bar.",
        dictionary_body: "Your word categories live here.",
        tests_body: "Practice tests for the categories you have learned.",
        students_body: "Your students:",
        no_students: "You have no students yet.",
        not_found: "Nothing at {href}",
    },
    fields: FieldTexts {
        category: "Category",
        message: "Message",
        search: "Search",
    },
    help: HelpTexts {
        title: "Help",
        lines: &[
            ("Tab / Shift+Tab", "Move focus"),
            ("Enter", "Activate focused item"),
            ("Esc", "Close menu or dialog"),
            ("Mouse click", "Click"),
            ("Mouse drag left", "Swipe"),
            ("Mouse wheel", "Scroll"),
            ("Alt+a", "Add students"),
            ("Alt+s", "Share category with selected student"),
            ("Alt+l", "Switch language"),
            ("Ctrl+c / Alt+q", "Quit"),
        ],
    },
};
