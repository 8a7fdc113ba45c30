//! 应用主状态结构

use std::time::{Duration, Instant};

use mobile_nav_core::api::StudentSummary;
use mobile_nav_core::modal::LoadState;
use mobile_nav_core::{
    Language, LayoutMode, NavEvent, Notifications, Reaction, ResponsiveNavigationController,
};
use ratatui::layout::Rect;

use super::{DemoPage, ModalState, Page};
use crate::backend::AppConfig;
use crate::i18n::{set_language, texts_for};
use crate::message::Task;

/// 无事发生时的最长等待
const IDLE_POLL: Duration = Duration::from_millis(100);
/// 有等待中的动画帧时的等待（约 60 帧）
const FRAME_POLL: Duration = Duration::from_millis(16);

/// 鼠标按下时记录的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDown {
    pub column: u16,
    pub row: u16,
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 配置
    pub config: AppConfig,

    /// 终端区域
    pub screen: Rect,

    /// 演示页面（导航控制器操作的文档）
    pub page: DemoPage,

    /// 导航控制器；切换语言时会短暂拆除再重新挂载
    pub controller: Option<ResponsiveNavigationController>,

    /// 当前页面
    pub current_page: Page,

    /// 正文滚动行数
    pub scroll_rows: u16,

    /// 鼠标按下位置（用于区分点击和拖动）
    pub pointer: Option<PointerDown>,

    /// 学生页面的数据
    pub students: LoadState<Vec<StudentSummary>>,
    /// 学生页面选中的行
    pub selected_student: usize,

    /// 弹窗状态
    pub modal: ModalState,

    /// 自动消失的通知
    pub notifications: Notifications,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 渲染之后要执行的接口任务
    pub pending: Option<Task>,
}

impl App {
    /// 创建新的应用实例，并挂载导航控制器
    pub fn new(config: AppConfig, screen: Rect) -> Self {
        let language = config.nav.language;
        set_language(language);
        let mut page = DemoPage::new(
            config.viewport_width(screen.width),
            "teacher",
            texts_for(language),
        );
        let controller = ResponsiveNavigationController::attach(config.nav.clone(), &mut page.doc);
        let notifications = Notifications::new(config.nav.notification_ttl());

        Self {
            should_quit: false,
            config,
            screen,
            page,
            controller: Some(controller),
            current_page: Page::Home,
            scroll_rows: 0,
            pointer: None,
            students: LoadState::Idle,
            selected_student: 0,
            modal: ModalState::new(),
            notifications,
            status_message: None,
            pending: None,
        }
    }

    pub fn language(&self) -> Language {
        self.config.nav.language
    }

    /// 把事件交给导航控制器
    pub fn dispatch(&mut self, event: NavEvent, now: Instant) -> Reaction {
        match self.controller.as_mut() {
            Some(controller) => controller.dispatch(&mut self.page.doc, event, now),
            None => Reaction::Ignored,
        }
    }

    /// 当前布局模式
    pub fn layout_mode(&self) -> LayoutMode {
        ResponsiveNavigationController::mode(&self.page.doc)
    }

    /// 切换语言：拆除控制器，更新文字后按新语言重新挂载
    pub fn set_language(&mut self, language: Language) {
        if let Some(controller) = self.controller.take() {
            controller.detach(&mut self.page.doc);
        }
        self.config.nav.language = language;
        set_language(language);
        self.page.relabel(texts_for(language));
        self.controller = Some(ResponsiveNavigationController::attach(
            self.config.nav.clone(),
            &mut self.page.doc,
        ));
    }

    /// 当前选中的学生（仅学生页面）
    pub fn selected_student(&self) -> Option<&StudentSummary> {
        if !self.current_page.is_students() {
            return None;
        }
        self.students
            .loaded()
            .and_then(|students| students.get(self.selected_student))
    }

    /// 主循环下一次轮询事件的超时
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let wants_frame = self
            .controller
            .as_ref()
            .is_some_and(ResponsiveNavigationController::wants_animation_frame);
        let mut timeout = if wants_frame { FRAME_POLL } else { IDLE_POLL };

        let deadlines = [
            self.controller
                .as_ref()
                .and_then(ResponsiveNavigationController::next_deadline),
            self.notifications.next_deadline(),
        ];
        for deadline in deadlines.into_iter().flatten() {
            timeout = timeout.min(deadline.saturating_duration_since(now));
        }
        timeout
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
