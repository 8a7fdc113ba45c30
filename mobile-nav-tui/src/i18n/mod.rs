//! 国际化（i18n）模块
//!
//! 终端界面自身的文本，语言枚举复用核心库的 [`Language`]。
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
pub mod keys;
mod ru_ru;

pub use keys::*;
pub use mobile_nav_core::i18n::{fill, Language};

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    texts_for(current_language())
}

/// 获取指定语言的翻译
pub fn texts_for(lang: Language) -> &'static Translations {
    match lang {
        Language::EnUs => &en_us::TRANSLATIONS,
        Language::RuRu => &ru_ru::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::RuRu => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::RuRu,
        _ => Language::EnUs,
    }
}
