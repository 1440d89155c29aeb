//! App-level view models and animation metadata.

use crate::{notify::NotificationKind, settings::Theme};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    SlideIn,
    SlideOut,
    Fade,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn end_ms(self) -> u64 {
        self.start_ms.saturating_add(self.duration_ms.max(1) as u64)
    }

    /// Frame at `now_ms`, or `None` before the start and after the end.
    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        if now_ms < self.start_ms {
            return None;
        }

        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms - self.start_ms;
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PreloaderView {
    Shown,
    Fading(AnimationFrame),
    Hidden,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavItemView<'a> {
    pub label: &'a str,
    pub target: &'a str,
    pub selected: bool,
}

impl Default for NavItemView<'_> {
    fn default() -> Self {
        Self {
            label: "",
            target: "",
            selected: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StatView<'a> {
    pub label: &'a str,
    pub value: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NotificationView<'a> {
    pub message: &'a str,
    pub kind: NotificationKind,
    pub icon: &'a str,
    pub animation: Option<AnimationFrame>,
}

/// Everything a renderer needs to draw the page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Screen<'a> {
    pub title: &'a str,
    /// Visible prefix of the rotating hero phrase.
    pub typed_text: &'a str,
    pub theme: Theme,
    pub theme_icon: &'a str,
    pub navbar_scrolled: bool,
    pub menu_open: bool,
    /// Hero translation for the parallax effect.
    pub hero_offset: i32,
    pub nav: &'a [NavItemView<'a>],
    pub stats: &'a [StatView<'a>],
    pub revealed: usize,
    pub reveal_total: usize,
    pub contact_button: &'a str,
    pub contact_sending: bool,
    pub notification: Option<NotificationView<'a>>,
    pub preloader: PreloaderView,
}
