//! 自动消失的通知消息

use std::time::{Duration, Instant};

/// 通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// 一条通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
    pub expires_at: Instant,
}

/// 通知队列：每条通知在 `ttl` 之后自动移除，也可手动关闭
#[derive(Debug, Clone)]
pub struct Notifications {
    ttl: Duration,
    next_id: u64,
    items: Vec<Notification>,
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            next_id: 1,
            items: Vec::new(),
        }
    }

    /// 添加通知，返回其 ID
    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            text: text.into(),
            expires_at: now + self.ttl,
        });
        id
    }

    /// 手动关闭；返回是否存在该通知
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// 移除已过期的通知，返回移除的数量
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|n| n.expires_at > now);
        before - self.items.len()
    }

    /// 最早的过期时刻
    pub fn next_deadline(&self) -> Option<Instant> {
        self.items.iter().map(|n| n.expires_at).min()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_expire_after_ttl() {
        let t0 = Instant::now();
        let mut queue = Notifications::new(Duration::from_secs(5));
        queue.push(NotificationKind::Success, "Invitation sent", t0);
        queue.push(NotificationKind::Error, "Error: nope", t0 + Duration::from_secs(2));

        assert_eq!(queue.next_deadline(), Some(t0 + Duration::from_secs(5)));
        assert_eq!(queue.prune(t0 + Duration::from_millis(4999)), 0);
        assert_eq!(queue.prune(t0 + Duration::from_secs(5)), 1);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.prune(t0 + Duration::from_secs(7)), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn dismiss_by_id() {
        let t0 = Instant::now();
        let mut queue = Notifications::new(Duration::from_secs(5));
        let id = queue.push(NotificationKind::Success, "ok", t0);
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
    }
}
