//! 应用主循环
//!
//! 每一轮：
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     if let Some(task) = app.pending.take() {        // 有待执行的接口任务：
//!         update::run_task(...)                       //   "加载中" 已经画出来了，现在执行
//!         continue
//!     }
//!     poll_event(app.poll_timeout(now))               // 等待输入，超时取决于
//!                                                     // 防抖截止时间 / 动画帧 / 通知过期
//!     update::update(&mut app, msg, now)              // 处理输入
//!     update::update(&mut app, Tick, now)             // 推进防抖、动画帧和通知
//! }

use std::time::Instant;

use anyhow::Result;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &Backend) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 执行渲染前登记的接口任务
        if let Some(task) = app.pending.take() {
            update::run_task(app, backend, task, Instant::now());
            continue;
        }

        // 4. 轮询事件
        let timeout = app.poll_timeout(Instant::now());
        if let Some(event) = event::poll_event(timeout)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg, Instant::now());
        }

        // 5. 到期的防抖、动画帧、通知
        update::update(app, AppMessage::Tick, Instant::now());
    }

    Ok(())
}
