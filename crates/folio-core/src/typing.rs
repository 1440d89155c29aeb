//! Typewriter effect that rotates through a fixed list of phrases.
//!
//! The sequencer owns no timer. Every [`TypingSequencer::step`] returns the
//! delay until the next step and the host decides when to call it again.

use heapless::Vec;
use log::debug;

/// Maximum number of phrases a sequencer can rotate through.
pub const MAX_PHRASES: usize = 8;

/// Sink receiving the currently visible prefix.
pub trait TextSink {
    fn show_text(&mut self, text: &str);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TypingConfig {
    /// Delay before the very first step.
    pub start_delay_ms: u16,
    pub type_delay_ms: u16,
    pub delete_delay_ms: u16,
    /// Pause once a phrase is fully typed.
    pub end_pause_ms: u16,
    /// Pause once a phrase is fully deleted, before typing the next one.
    pub next_phrase_pause_ms: u16,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 500,
            type_delay_ms: 100,
            delete_delay_ms: 50,
            end_pause_ms: 2_000,
            next_phrase_pause_ms: 500,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypingError {
    NoPhrases,
    EmptyPhrase { index: usize },
    TooManyPhrases,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypingMode {
    Growing,
    Shrinking,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TypingState {
    pub phrase_index: usize,
    pub char_count: usize,
    pub mode: TypingMode,
}

impl TypingState {
    const fn initial() -> Self {
        Self {
            phrase_index: 0,
            char_count: 0,
            mode: TypingMode::Growing,
        }
    }
}

/// Outcome of one step: the new state and how long to wait before the next.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TypingStep {
    pub state: TypingState,
    pub delay_ms: u16,
}

#[derive(Clone, Copy, Debug)]
struct Phrase<'a> {
    text: &'a str,
    chars: usize,
}

#[derive(Clone, Debug)]
pub struct TypingSequencer<'a> {
    phrases: Vec<Phrase<'a>, MAX_PHRASES>,
    config: TypingConfig,
    state: TypingState,
}

impl<'a> TypingSequencer<'a> {
    pub fn new(phrases: &[&'a str], config: TypingConfig) -> Result<Self, TypingError> {
        if phrases.is_empty() {
            return Err(TypingError::NoPhrases);
        }

        let mut stored = Vec::new();
        for (index, text) in phrases.iter().copied().enumerate() {
            let chars = text.chars().count();
            if chars == 0 {
                return Err(TypingError::EmptyPhrase { index });
            }
            stored
                .push(Phrase { text, chars })
                .map_err(|_| TypingError::TooManyPhrases)?;
        }

        Ok(Self {
            phrases: stored,
            config,
            state: TypingState::initial(),
        })
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    /// Character length of the phrase currently being typed.
    pub fn current_phrase_len(&self) -> usize {
        self.current().chars
    }

    pub fn step(&mut self) -> TypingStep {
        let phrase_len = self.current().chars;
        let mut next = self.state;

        let delay_ms = match next.mode {
            TypingMode::Growing => {
                next.char_count = (next.char_count + 1).min(phrase_len);
                if next.char_count == phrase_len {
                    next.mode = TypingMode::Shrinking;
                    self.config.end_pause_ms
                } else {
                    self.config.type_delay_ms
                }
            }
            TypingMode::Shrinking => {
                next.char_count = next.char_count.saturating_sub(1);
                if next.char_count == 0 {
                    next.mode = TypingMode::Growing;
                    next.phrase_index = (next.phrase_index + 1) % self.phrases.len();
                    self.config.next_phrase_pause_ms
                } else {
                    self.config.delete_delay_ms
                }
            }
        };

        if next.mode != self.state.mode {
            debug!("typing: phrase {} -> {:?}", next.phrase_index, next.mode);
        }

        self.state = next;
        TypingStep {
            state: next,
            delay_ms,
        }
    }

    /// Leading `char_count` characters of the current phrase.
    pub fn visible_text(&self) -> &'a str {
        let text = self.current().text;
        match text.char_indices().nth(self.state.char_count) {
            Some((byte_end, _)) => &text[..byte_end],
            None => text,
        }
    }

    pub fn emit<S: TextSink>(&self, sink: &mut S) {
        sink.show_text(self.visible_text());
    }

    fn current(&self) -> Phrase<'a> {
        self.phrases[self.state.phrase_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [&str; 3] = ["Software Engineer", "Rustacean", "Café dev"];

    fn sequencer() -> TypingSequencer<'static> {
        TypingSequencer::new(&ROLES, TypingConfig::default()).unwrap()
    }

    #[derive(Default)]
    struct Slot(String);

    impl TextSink for Slot {
        fn show_text(&mut self, text: &str) {
            self.0.clear();
            self.0.push_str(text);
        }
    }

    #[test]
    fn rejects_missing_or_empty_phrases() {
        assert_eq!(
            TypingSequencer::new(&[], TypingConfig::default()).unwrap_err(),
            TypingError::NoPhrases
        );
        assert_eq!(
            TypingSequencer::new(&["ok", ""], TypingConfig::default()).unwrap_err(),
            TypingError::EmptyPhrase { index: 1 }
        );
        let many = ["x"; MAX_PHRASES + 1];
        assert_eq!(
            TypingSequencer::new(&many, TypingConfig::default()).unwrap_err(),
            TypingError::TooManyPhrases
        );
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut seq = sequencer();
        let total: usize = ROLES.iter().map(|p| p.chars().count()).sum();
        for _ in 0..2 * total {
            seq.step();
        }
        assert_eq!(seq.state(), TypingState::initial());
    }

    #[test]
    fn visible_text_tracks_prefix_and_bounds() {
        let mut seq = sequencer();
        let mut slot = Slot::default();
        for _ in 0..200 {
            let step = seq.step();
            seq.emit(&mut slot);
            let phrase = ROLES[step.state.phrase_index];
            let expected: String = phrase.chars().take(step.state.char_count).collect();
            assert!(step.state.char_count <= phrase.chars().count());
            assert_eq!(slot.0, expected);
            assert_eq!(seq.visible_text(), expected);
        }
    }

    #[test]
    fn mode_flips_only_at_phrase_edges() {
        let mut seq = sequencer();
        for _ in 0..200 {
            let before = seq.state();
            let len = seq.current_phrase_len();
            let after = seq.step().state;
            match (before.mode, after.mode) {
                (TypingMode::Growing, TypingMode::Shrinking) => {
                    assert_eq!(after.char_count, len);
                    assert_eq!(after.phrase_index, before.phrase_index);
                }
                (TypingMode::Shrinking, TypingMode::Growing) => {
                    assert_eq!(after.char_count, 0);
                    assert_eq!(after.phrase_index, (before.phrase_index + 1) % ROLES.len());
                }
                _ => assert_eq!(after.phrase_index, before.phrase_index),
            }
        }
    }

    #[test]
    fn delays_follow_mode_and_edges() {
        let config = TypingConfig::default();
        let mut seq = TypingSequencer::new(&["ab"], config).unwrap();

        assert_eq!(seq.step().delay_ms, config.type_delay_ms);
        assert_eq!(seq.step().delay_ms, config.end_pause_ms);
        assert_eq!(seq.step().delay_ms, config.delete_delay_ms);

        let last = seq.step();
        assert_eq!(last.delay_ms, config.next_phrase_pause_ms);
        assert_eq!(last.state, TypingState::initial());
    }

    #[test]
    fn single_character_phrase_pauses_immediately() {
        let mut seq = TypingSequencer::new(&["é"], TypingConfig::default()).unwrap();
        let grown = seq.step();
        assert_eq!(grown.state.mode, TypingMode::Shrinking);
        assert_eq!(seq.visible_text(), "é");
        seq.step();
        assert_eq!(seq.visible_text(), "");
    }
}
