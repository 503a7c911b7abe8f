/// Horizontal movement after which a touch is treated as a swipe and page
/// scrolling should be suppressed.
const AXIS_LOCK_PX: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Prev,
}

impl Swipe {
    /// Dragging left (negative displacement) reveals the next slide.
    pub fn classify(displacement: f64, threshold: f64) -> Option<Swipe> {
        if displacement < -threshold {
            Some(Swipe::Next)
        } else if displacement > threshold {
            Some(Swipe::Prev)
        } else {
            None
        }
    }
}

/// Tracks one pointer or touch gesture from start to end.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
    last_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
        self.last_x = None;
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Records a move. Returns true when the gesture is mostly horizontal and
    /// past the axis lock, meaning the host should prevent vertical scroll.
    pub fn update(&mut self, x: f64, y: f64) -> bool {
        let Some((start_x, start_y)) = self.start else {
            return false;
        };
        self.last_x = Some(x);
        let dx = (x - start_x).abs();
        let dy = (y - start_y).abs();
        dx > dy && dx > AXIS_LOCK_PX
    }

    /// Ends the gesture and yields the net horizontal displacement, or `None`
    /// for a tap (no movement recorded) or a gesture that never began.
    pub fn finish(&mut self) -> Option<f64> {
        let start = self.start.take();
        let last_x = self.last_x.take();
        match (start, last_x) {
            (Some((start_x, _)), Some(x)) => Some(x - start_x),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.last_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_moves_are_not_swipes() {
        assert_eq!(Swipe::classify(10.0, 30.0), None);
        assert_eq!(Swipe::classify(-10.0, 30.0), None);
        assert_eq!(Swipe::classify(30.0, 30.0), None);
    }

    #[test]
    fn direction_follows_sign() {
        assert_eq!(Swipe::classify(-50.0, 30.0), Some(Swipe::Next));
        assert_eq!(Swipe::classify(50.0, 30.0), Some(Swipe::Prev));
    }

    #[test]
    fn tap_yields_no_displacement() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(100.0, 200.0);
        assert!(tracker.is_active());
        assert_eq!(tracker.finish(), None);
        assert!(!tracker.is_active());
    }

    #[test]
    fn displacement_is_end_minus_start() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(200.0, 50.0);
        tracker.update(180.0, 52.0);
        tracker.update(150.0, 55.0);
        assert_eq!(tracker.finish(), Some(-50.0));
    }

    #[test]
    fn vertical_moves_do_not_lock_axis() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(0.0, 0.0);
        assert!(!tracker.update(5.0, 40.0));
        assert!(!tracker.update(8.0, 2.0));
        assert!(tracker.update(-25.0, 4.0));
    }

    #[test]
    fn moves_without_begin_are_ignored() {
        let mut tracker = SwipeTracker::default();
        assert!(!tracker.update(80.0, 0.0));
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn finished_gesture_does_not_leak_into_the_next_press() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(300.0, 0.0);
        tracker.update(280.0, 0.0);
        assert_eq!(tracker.finish(), Some(-20.0));
        assert_eq!(tracker.finish(), None);
        // hovering moves after release must not count toward anything
        assert!(!tracker.update(100.0, 0.0));
        tracker.begin(100.0, 0.0);
        assert_eq!(tracker.finish(), None);
    }
}
