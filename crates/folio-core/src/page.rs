//! Static page description: phrases, layout and tuning for every effect.

use crate::{
    reveal::{RevealConfig, RevealTarget},
    sections::{Region, TrackerConfig, TrackerError},
    typing::{TypingConfig, TypingError},
};

pub const MAX_STATS: usize = 6;

pub const DEFAULT_PHRASES: [&str; 3] = [
    "Software Engineer",
    "Backend Developer",
    "Open Source Contributor",
];

pub const DEFAULT_SECTIONS: [Region<'static>; 5] = [
    Region::new("home", 0, 900),
    Region::new("about", 900, 700),
    Region::new("projects", 1_600, 1_200),
    Region::new("skills", 2_800, 600),
    Region::new("contact", 3_400, 800),
];

pub const DEFAULT_NAV: [NavLink<'static>; 5] = [
    NavLink::new("Home", "home"),
    NavLink::new("About", "about"),
    NavLink::new("Projects", "projects"),
    NavLink::new("Skills", "skills"),
    NavLink::new("Contact", "contact"),
];

pub const DEFAULT_FADE_BLOCKS: [RevealTarget; 6] = [
    RevealTarget::new(960, 420),
    RevealTarget::new(1_680, 520),
    RevealTarget::new(2_220, 520),
    RevealTarget::new(2_880, 460),
    RevealTarget::new(3_480, 300),
    RevealTarget::new(3_820, 320),
];

pub const DEFAULT_STATS: [StatSpec<'static>; 3] = [
    StatSpec::new("Projects", 20, RevealTarget::new(1_380, 140)),
    StatSpec::new("Years", 5, RevealTarget::new(1_380, 140)),
    StatSpec::new("Technologies", 15, RevealTarget::new(1_380, 140)),
];

/// Navigation entry pointing at a section id. An empty target is a bare `#` link.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavLink<'a> {
    pub label: &'a str,
    pub target: &'a str,
}

impl<'a> NavLink<'a> {
    pub const fn new(label: &'a str, target: &'a str) -> Self {
        Self { label, target }
    }
}

/// Headline number that counts up once its block scrolls into view.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StatSpec<'a> {
    pub label: &'a str,
    pub target: u32,
    pub block: RevealTarget,
}

impl<'a> StatSpec<'a> {
    pub const fn new(label: &'a str, target: u32, block: RevealTarget) -> Self {
        Self {
            label,
            target,
            block,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageConfig<'a> {
    pub title: &'a str,
    /// Address behind the `mailto:` contact link.
    pub email: &'a str,
    pub phrases: &'a [&'a str],
    pub typing: TypingConfig,
    pub sections: &'a [Region<'a>],
    pub nav: &'a [NavLink<'a>],
    pub tracker: TrackerConfig,
    /// Quiet period before the active section is recomputed after scrolling.
    pub nav_debounce_ms: u16,
    pub navbar_height: i32,
    pub viewport_height: i32,
    pub fade_blocks: &'a [RevealTarget],
    pub reveal: RevealConfig,
    pub stats: &'a [StatSpec<'a>],
    pub stat_reveal: RevealConfig,
    pub stat_frame_ms: u16,
    pub preloader_delay_ms: u16,
    pub preloader_fade_ms: u16,
}

impl Default for PageConfig<'static> {
    fn default() -> Self {
        Self {
            title: "Portfolio",
            email: "hello@example.com",
            phrases: &DEFAULT_PHRASES,
            typing: TypingConfig::default(),
            sections: &DEFAULT_SECTIONS,
            nav: &DEFAULT_NAV,
            tracker: TrackerConfig::default(),
            nav_debounce_ms: 100,
            navbar_height: 70,
            viewport_height: 900,
            fade_blocks: &DEFAULT_FADE_BLOCKS,
            reveal: RevealConfig::default(),
            stats: &DEFAULT_STATS,
            stat_reveal: RevealConfig {
                threshold_pct: 50,
                bottom_margin: 0,
            },
            stat_frame_ms: 16,
            preloader_delay_ms: 500,
            preloader_fade_ms: 300,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageError {
    Typing(TypingError),
    Sections(TrackerError),
    TooManyFadeBlocks,
    TooManyStats,
}

impl From<TypingError> for PageError {
    fn from(err: TypingError) -> Self {
        Self::Typing(err)
    }
}

impl From<TrackerError> for PageError {
    fn from(err: TrackerError) -> Self {
        Self::Sections(err)
    }
}
