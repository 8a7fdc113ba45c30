//! 接口任务
//!
//! update 层只登记任务，不直接调用接口；
//! app.rs 在渲染出"加载中"状态之后执行任务。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// 加载学生页面的列表
    LoadStudents,
    /// "发送分类"弹窗加载分类
    LoadCategories,
    /// "发送分类"弹窗提交
    ShareCategory,
    /// "添加学生"弹窗搜索
    SearchStudents,
    /// "发送邀请"弹窗提交
    SendRequest,
}
