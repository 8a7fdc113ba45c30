//! 触摸手势识别

/// 触摸点（逻辑像素）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 一次完整触摸的位移
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    pub delta_x: f64,
    pub delta_y: f64,
}

impl Swipe {
    /// 是否为左滑：水平位移 < -threshold 且垂直位移绝对值 < threshold
    pub fn is_left(&self, threshold: f64) -> bool {
        self.delta_x < -threshold && self.delta_y.abs() < threshold
    }
}

/// 记录 touchstart，在 touchend 时给出位移
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<Point>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, point: Point) {
        self.start = Some(point);
    }

    /// 结束一次触摸；没有对应的 touchstart 时返回 `None`
    pub fn touch_end(&mut self, point: Point) -> Option<Swipe> {
        let start = self.start.take()?;
        Some(Swipe {
            delta_x: point.x - start.x,
            delta_y: point.y - start.y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_swipe_within_vertical_tolerance() {
        assert!(Swipe { delta_x: -60.0, delta_y: 10.0 }.is_left(50.0));
        assert!(!Swipe { delta_x: -60.0, delta_y: 80.0 }.is_left(50.0));
        assert!(!Swipe { delta_x: -50.0, delta_y: 0.0 }.is_left(50.0));
        assert!(!Swipe { delta_x: 60.0, delta_y: 0.0 }.is_left(50.0));
    }

    #[test]
    fn tracker_pairs_start_and_end() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.touch_end(Point::new(0.0, 0.0)), None);

        tracker.touch_start(Point::new(200.0, 100.0));
        let swipe = tracker.touch_end(Point::new(140.0, 110.0)).unwrap();
        assert!((swipe.delta_x + 60.0).abs() < f64::EPSILON);
        assert!((swipe.delta_y - 10.0).abs() < f64::EPSILON);

        assert_eq!(tracker.touch_end(Point::new(0.0, 0.0)), None);
    }
}
