use embassy_time::Instant;
use folio_core::input::{InputEvent, InputProvider};

const GLIDE_MS: u64 = 400;
const GLIDE_STEP_MS: u64 = 16;

/// Timed page interactions replayed against the host clock.
pub(super) const SESSION: [(u64, InputEvent); 15] = [
    (1_200, InputEvent::Scroll(120)),
    (1_800, InputEvent::Scroll(480)),
    (2_600, InputEvent::Scroll(850)),
    (3_400, InputEvent::Scroll(1_300)),
    (4_500, InputEvent::ToggleMenu),
    (4_900, InputEvent::NavLink(2)),
    (7_000, InputEvent::ToggleTheme),
    (8_000, InputEvent::Resize(720)),
    (8_600, InputEvent::NavLink(4)),
    (10_000, InputEvent::SubmitContact),
    (10_400, InputEvent::SubmitContact),
    (12_800, InputEvent::CopyEmail),
    (13_500, InputEvent::ToggleMenu),
    (13_900, InputEvent::ClickOutside),
    (16_000, InputEvent::ToggleTheme),
];

#[derive(Clone, Copy, Debug)]
struct Glide {
    from: i32,
    to: i32,
    start_ms: u64,
    last_emit_ms: Option<u64>,
}

impl Glide {
    fn offset_at(&self, now_ms: u64) -> i32 {
        let elapsed = now_ms.saturating_sub(self.start_ms).min(GLIDE_MS) as i64;
        let span = self.to as i64 - self.from as i64;
        (self.from as i64 + span * elapsed / GLIDE_MS as i64) as i32
    }
}

/// Scripted visitor that also performs smooth scrolls requested by the page.
pub(super) struct ScriptedVisitor {
    started: Instant,
    script: &'static [(u64, InputEvent)],
    cursor: usize,
    glide: Option<Glide>,
}

impl ScriptedVisitor {
    pub(super) fn new(started: Instant, script: &'static [(u64, InputEvent)]) -> Self {
        Self {
            started,
            script,
            cursor: 0,
            glide: None,
        }
    }

    pub(super) fn is_finished(&self) -> bool {
        self.cursor >= self.script.len() && self.glide.is_none()
    }

    pub(super) fn glide(&mut self, from: i32, to: i32, now_ms: u64) {
        self.glide = Some(Glide {
            from,
            to,
            start_ms: now_ms,
            last_emit_ms: None,
        });
    }

    fn next_glide_offset(&mut self, now_ms: u64) -> Option<i32> {
        let glide = self.glide.as_mut()?;
        if glide
            .last_emit_ms
            .is_some_and(|last| now_ms.saturating_sub(last) < GLIDE_STEP_MS)
        {
            return None;
        }

        glide.last_emit_ms = Some(now_ms);
        let offset = glide.offset_at(now_ms);
        if now_ms.saturating_sub(glide.start_ms) >= GLIDE_MS {
            self.glide = None;
        }
        Some(offset)
    }
}

impl InputProvider for ScriptedVisitor {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let now_ms = self.started.elapsed().as_millis();

        if let Some((at_ms, event)) = self.script.get(self.cursor).copied()
            && now_ms >= at_ms
        {
            self.cursor += 1;
            return Ok(Some(event));
        }

        Ok(self.next_glide_offset(now_ms).map(InputEvent::Scroll))
    }
}
