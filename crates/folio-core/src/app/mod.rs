//! Page runtime composing the typing effect, section tracking and scroll effects.

use heapless::Vec;
use log::{debug, info, warn};

use crate::{
    clipboard::{ClipboardSink, EMAIL_COPIED_MESSAGE},
    contact::{CONTACT_SENT_MESSAGE, ContactForm, SubmitResult},
    counter::StatCounter,
    input::{InputEvent, InputProvider},
    notify::{NotificationKind, Notifier},
    page::{MAX_STATS, PageConfig, PageError},
    render::{
        AnimationKind, AnimationSpec, NavItemView, NotificationView, PreloaderView, Screen,
        StatView,
    },
    reveal::RevealSet,
    scroll::{Debounce, navbar_scrolled, parallax_offset, scroll_target},
    sections::{ActiveSectionTracker, MAX_NAV_ENTRIES, TrackerError},
    settings::{PersistedSettings, SettingsStore, Theme},
    typing::TypingSequencer,
};

const INPUT_ERROR_MESSAGE: &str = "Oops! Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

pub struct PortfolioApp<'a, IN, ST, CB>
where
    IN: InputProvider,
    ST: SettingsStore,
    CB: ClipboardSink,
{
    input: IN,
    store: ST,
    clipboard: CB,
    config: PageConfig<'a>,
    typing: TypingSequencer<'a>,
    next_type_ms: u64,
    sections: ActiveSectionTracker<'a>,
    section_debounce: Debounce<i32>,
    scroll_offset: i32,
    viewport_height: i32,
    fade_blocks: RevealSet,
    stat_blocks: RevealSet,
    stats: Vec<StatCounter, MAX_STATS>,
    notifier: Notifier,
    contact: ContactForm,
    theme: Theme,
    menu_open: bool,
    scroll_request: Option<i32>,
    preloader: AnimationSpec,
    pending_redraw: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
