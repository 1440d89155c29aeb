//! Single toast banner with slide-in / slide-out lifecycle.

use log::debug;

use crate::render::{AnimationFrame, AnimationKind, AnimationSpec};

pub const NOTIFY_SLIDE_MS: u16 = 300;
pub const NOTIFY_VISIBLE_MS: u64 = 5_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Notification {
    pub message: &'static str,
    pub kind: NotificationKind,
    shown_at_ms: u64,
}

impl Notification {
    fn leave_at_ms(&self) -> u64 {
        self.shown_at_ms.saturating_add(NOTIFY_VISIBLE_MS)
    }

    fn gone_at_ms(&self) -> u64 {
        self.leave_at_ms().saturating_add(NOTIFY_SLIDE_MS as u64)
    }

    /// Slide animation running at `now_ms`, if any.
    pub fn animation(&self, now_ms: u64) -> Option<AnimationFrame> {
        if now_ms >= self.leave_at_ms() {
            AnimationSpec::new(AnimationKind::SlideOut, self.leave_at_ms(), NOTIFY_SLIDE_MS)
                .frame(now_ms)
        } else {
            AnimationSpec::new(AnimationKind::SlideIn, self.shown_at_ms, NOTIFY_SLIDE_MS)
                .frame(now_ms)
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Notifier {
    current: Option<Notification>,
}

impl Notifier {
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Shows `message`, replacing whatever banner is on screen.
    pub fn show(&mut self, message: &'static str, kind: NotificationKind, now_ms: u64) {
        debug!("notify: {:?} {}", kind, message);
        self.current = Some(Notification {
            message,
            kind,
            shown_at_ms: now_ms,
        });
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Next instant at which the banner changes phase.
    pub fn next_change_ms(&self, now_ms: u64) -> Option<u64> {
        let notification = self.current?;
        let slide_in_end = notification
            .shown_at_ms
            .saturating_add(NOTIFY_SLIDE_MS as u64);
        [slide_in_end, notification.leave_at_ms(), notification.gone_at_ms()]
            .into_iter()
            .find(|at| *at > now_ms)
    }

    /// Drops an expired banner. Returns `true` when one was removed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.current {
            Some(notification) if now_ms >= notification.gone_at_ms() => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_lifecycle() {
        let mut notifier = Notifier::new();
        notifier.show("Saved", NotificationKind::Success, 1_000);

        let banner = *notifier.current().unwrap();
        let entering = banner.animation(1_150).unwrap();
        assert_eq!(entering.kind, AnimationKind::SlideIn);
        assert_eq!(entering.progress_pct, 50);

        assert_eq!(banner.animation(3_000), None);

        let leaving = banner.animation(6_000).unwrap();
        assert_eq!(leaving.kind, AnimationKind::SlideOut);
        assert_eq!(leaving.progress_pct, 0);

        assert!(!notifier.tick(6_299));
        assert!(notifier.tick(6_300));
        assert!(notifier.current().is_none());
    }

    #[test]
    fn newer_banner_replaces_older() {
        let mut notifier = Notifier::new();
        notifier.show("first", NotificationKind::Success, 0);
        notifier.show("second", NotificationKind::Error, 4_000);

        assert!(!notifier.tick(5_300));
        let banner = notifier.current().unwrap();
        assert_eq!(banner.message, "second");
        assert_eq!(banner.kind.icon(), "exclamation-circle");
    }

    #[test]
    fn next_change_walks_phase_edges() {
        let mut notifier = Notifier::new();
        assert_eq!(notifier.next_change_ms(0), None);

        notifier.show("hi", NotificationKind::Success, 100);
        assert_eq!(notifier.next_change_ms(100), Some(400));
        assert_eq!(notifier.next_change_ms(400), Some(5_100));
        assert_eq!(notifier.next_change_ms(5_100), Some(5_400));
        assert_eq!(notifier.next_change_ms(5_400), None);
    }
}
