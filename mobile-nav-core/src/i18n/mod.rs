//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 与终端界面不同，这里不保存全局"当前语言"：调用方从配置里拿到
//! [`Language`] 后显式调用 [`Language::texts`]。

mod en_us;
pub mod keys;
mod ru_ru;

use serde::{Deserialize, Serialize};

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// 英语（美国）
    #[default]
    #[serde(rename = "en-US", alias = "en")]
    EnUs,
    /// 俄语（平台原始界面语言）
    #[serde(rename = "ru-RU", alias = "ru")]
    RuRu,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::RuRu]
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::RuRu => "Русский",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(&self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::RuRu => "ru-RU",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "ru-RU" | "ru" => Some(Language::RuRu),
            _ => None,
        }
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(&self) -> Language {
        match self {
            Language::EnUs => Language::RuRu,
            Language::RuRu => Language::EnUs,
        }
    }

    /// 获取该语言的翻译
    pub fn texts(&self) -> &'static Translations {
        match self {
            Language::EnUs => &en_us::TRANSLATIONS,
            Language::RuRu => &ru_ru::TRANSLATIONS,
        }
    }
}

/// 填充 `{key}` 形式的占位符
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{key}}}"), value)
    })
}
