//! 计时原语：防抖与按帧节流
//!
//! 控制器本身不持有定时器线程，宿主循环把当前时间传进来，
//! 再通过 [`Debouncer::deadline`] 决定下一次轮询的超时。

use std::time::{Duration, Instant};

/// 防抖器：一串触发只在最后一次触发静默 `delay` 之后生效一次
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 触发（重新开始计时，后到者生效）
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// 取消等待中的触发
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// 等待中的触发时刻
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// 到期则返回 `true` 并清除，每次触发序列只返回一次 `true`
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// 按动画帧节流：无论事件多频繁，每帧最多执行一次
#[derive(Debug, Clone, Default)]
pub struct FrameThrottle {
    ticking: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// 请求一帧；返回 `true` 表示需要新调度一帧，`false` 表示本帧已在等待
    pub fn request(&mut self) -> bool {
        if self.ticking {
            false
        } else {
            self.ticking = true;
            true
        }
    }

    pub fn is_pending(&self) -> bool {
        self.ticking
    }

    /// 帧到来时调用；返回是否有等待执行的工作
    pub fn take_frame(&mut self) -> bool {
        std::mem::take(&mut self.ticking)
    }
}
