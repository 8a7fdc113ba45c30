//! 翻译键定义
//!
//! 定义终端界面自身的文本。导航栏按钮标签、弹窗文本由核心库的
//! [`mobile_nav_core::i18n`] 提供，这里只放宿主界面用到的部分。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **页面内容归 `pages.*`**：演示页面的导航条目和正文
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 演示页面
    pub pages: PageTexts,
    /// 弹窗里的字段名
    pub fields: FieldTexts,
    /// 帮助弹窗
    pub help: HelpTexts,
}

pub struct CommonTexts {
    pub app_name: &'static str,
    /// 标题栏里的模式 / 宽度提示，占位符 `{mode}` `{width}`
    pub viewport: &'static str,
    pub desktop: &'static str,
    pub mobile: &'static str,
    pub loading: &'static str,
    /// 切换语言后的提示，占位符 `{language}`
    pub language_changed: &'static str,
    /// 跳转提示，占位符 `{href}`
    pub followed: &'static str,
}

pub struct HintTexts {
    pub quit: &'static str,
    pub focus: &'static str,
    pub activate: &'static str,
    pub close: &'static str,
    pub select: &'static str,
    pub share: &'static str,
    pub add_students: &'static str,
    pub language: &'static str,
    pub help: &'static str,
    pub search: &'static str,
    pub submit: &'static str,
    pub next_field: &'static str,
}

pub struct PageTexts {
    pub home: &'static str,
    pub dictionary: &'static str,
    pub tests: &'static str,
    pub students: &'static str,
    pub log_out: &'static str,
    /// 问候语，占位符 `{name}`
    pub greeting: &'static str,
    pub home_body: &'static str,
    pub dictionary_body: &'static str,
    pub tests_body: &'static str,
    pub students_body: &'static str,
    pub no_students: &'static str,
    /// 未知地址，占位符 `{href}`
    pub not_found: &'static str,
}

pub struct FieldTexts {
    pub category: &'static str,
    pub message: &'static str,
    pub search: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    pub lines: &'static [(&'static str, &'static str)],
}
