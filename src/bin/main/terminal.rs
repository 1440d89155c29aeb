use core::fmt::Write;

use folio_core::render::{PreloaderView, Screen};
use heapless::String as HeaplessString;
use log::info;

const LINE_BYTES: usize = 320;

/// Renders page frames as log lines, skipping frames identical to the last one.
pub(super) struct TerminalRenderer {
    last: HeaplessString<LINE_BYTES>,
    frames: u64,
}

impl TerminalRenderer {
    pub(super) const fn new() -> Self {
        Self {
            last: HeaplessString::new(),
            frames: 0,
        }
    }

    pub(super) fn frames(&self) -> u64 {
        self.frames
    }

    pub(super) fn render(&mut self, screen: Screen<'_>) {
        let mut line = HeaplessString::<LINE_BYTES>::new();
        // Overflow only truncates the line.
        let _ = compose(&mut line, &screen);

        if line == self.last {
            return;
        }
        self.frames = self.frames.saturating_add(1);
        info!("{}", line.as_str());
        self.last = line;
    }
}

fn compose(out: &mut HeaplessString<LINE_BYTES>, screen: &Screen<'_>) -> core::fmt::Result {
    match screen.preloader {
        PreloaderView::Shown => return write!(out, "[{}] loading...", screen.title),
        PreloaderView::Fading(frame) => {
            return write!(out, "[{}] loading {}%", screen.title, frame.progress_pct);
        }
        PreloaderView::Hidden => {}
    }

    write!(
        out,
        "[{}|{}] I'm a {}_ ",
        screen.theme_icon,
        if screen.navbar_scrolled { "bar" } else { "top" },
        screen.typed_text
    )?;

    for item in screen.nav {
        if item.selected {
            write!(out, "<{}>", item.label)?;
        } else {
            write!(out, " {} ", item.label)?;
        }
    }
    if screen.menu_open {
        out.push_str(" [menu]").map_err(|_| core::fmt::Error)?;
    }

    write!(out, " hero={:+}", screen.hero_offset)?;
    write!(out, " shown={}/{}", screen.revealed, screen.reveal_total)?;
    for stat in screen.stats {
        write!(out, " {}={}+", stat.label, stat.value)?;
    }
    write!(out, " btn=\"{}\"", screen.contact_button)?;

    if let Some(banner) = screen.notification {
        write!(out, " ({}: {})", banner.icon, banner.message)?;
    }
    Ok(())
}
