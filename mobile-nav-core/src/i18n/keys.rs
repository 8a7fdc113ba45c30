//! 翻译键定义
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **带参数的文本使用 `{name}` 占位符**，由 [`super::fill`] 填充

/// 所有翻译文本的根结构
pub struct Translations {
    /// 导航栏文本
    pub nav: NavTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 通知文本
    pub notify: NotifyTexts,
}

/// 导航栏文本
pub struct NavTexts {
    /// 菜单关闭时切换按钮的无障碍标签
    pub open_menu: &'static str,
    /// 菜单打开时切换按钮的无障碍标签
    pub close_menu: &'static str,
}

/// 弹窗文本
pub struct ModalTexts {
    pub share_category: ShareCategoryTexts,
    pub add_students: AddStudentsTexts,
    pub send_request: SendRequestTexts,
}

/// "发送分类"弹窗
pub struct ShareCategoryTexts {
    /// 标题，占位符 `{name}`
    pub title: &'static str,
    /// 下拉框占位项
    pub placeholder: &'static str,
    /// 分类选项，占位符 `{name}` `{count}`
    pub option: &'static str,
    pub category_required: &'static str,
    pub student_id_missing: &'static str,
    pub load_failed: &'static str,
    pub send_failed: &'static str,
}

/// "添加学生"弹窗
pub struct AddStudentsTexts {
    pub title: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    /// 加载失败，占位符 `{error}`
    pub load_error: &'static str,
    pub load_failed: &'static str,
    pub already_student: &'static str,
    pub invitation_sent: &'static str,
    pub resend: &'static str,
    pub invite: &'static str,
}

/// "发送邀请"弹窗
pub struct SendRequestTexts {
    /// 标题，占位符 `{name}`
    pub title: &'static str,
    pub send_failed: &'static str,
}

/// 通知文本
pub struct NotifyTexts {
    /// 服务端拒绝，占位符 `{error}`
    pub error_prefix: &'static str,
}
