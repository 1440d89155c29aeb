//! Scroll-position effects and the trailing-edge debounce used to rate-limit them.

/// Offset past which the navbar switches to its compact background.
pub const NAVBAR_SCROLLED_THRESHOLD: i32 = 50;
/// Hero translation per scrolled unit, in percent.
pub const PARALLAX_SPEED_PCT: i32 = 50;

pub fn navbar_scrolled(scroll_offset: i32) -> bool {
    scroll_offset > NAVBAR_SCROLLED_THRESHOLD
}

pub fn parallax_offset(scroll_offset: i32) -> i32 {
    (scroll_offset as i64 * PARALLAX_SPEED_PCT as i64 / 100) as i32
}

/// Scroll destination that lands `region_start` just below a fixed navbar.
pub fn scroll_target(region_start: i32, navbar_height: i32) -> i32 {
    region_start.saturating_sub(navbar_height)
}

/// Delivers the last triggered value once `wait_ms` passes without a new trigger.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Debounce<T> {
    wait_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T: Copy> Debounce<T> {
    pub const fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    pub fn trigger(&mut self, value: T, now_ms: u64) {
        self.pending = Some((value, now_ms));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending value becomes due.
    pub fn due_at(&self) -> Option<u64> {
        self.pending
            .map(|(_, triggered_at)| triggered_at.saturating_add(self.wait_ms))
    }

    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let (value, triggered_at) = self.pending?;
        if now_ms.saturating_sub(triggered_at) < self.wait_ms {
            return None;
        }

        self.pending = None;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_switches_strictly_after_threshold() {
        assert!(!navbar_scrolled(0));
        assert!(!navbar_scrolled(50));
        assert!(navbar_scrolled(51));
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_eq!(parallax_offset(0), 0);
        assert_eq!(parallax_offset(300), 150);
        assert_eq!(parallax_offset(-40), -20);
        assert_eq!(parallax_offset(i32::MAX), i32::MAX / 2);
    }

    #[test]
    fn scroll_target_clears_navbar() {
        assert_eq!(scroll_target(800, 70), 730);
        assert_eq!(scroll_target(i32::MIN, 70), i32::MIN);
    }

    #[test]
    fn debounce_waits_for_quiet_period() {
        let mut debounce = Debounce::new(100);
        assert_eq!(debounce.poll(0), None);

        debounce.trigger(10, 0);
        debounce.trigger(20, 60);
        assert_eq!(debounce.due_at(), Some(160));
        assert_eq!(debounce.poll(120), None);
        assert_eq!(debounce.poll(160), Some(20));
        assert_eq!(debounce.poll(500), None);
        assert!(!debounce.is_pending());
    }

    #[test]
    fn zero_wait_fires_on_next_poll() {
        let mut debounce = Debounce::new(0);
        debounce.trigger('x', 42);
        assert_eq!(debounce.poll(42), Some('x'));
    }
}
