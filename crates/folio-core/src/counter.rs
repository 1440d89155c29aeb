//! Count-up animation for headline numbers ("50+ projects").

use log::debug;

pub const COUNTER_FRAMES: u8 = 50;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CounterPhase {
    Idle,
    Counting { frame: u8, next_frame_ms: u64 },
    Done,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StatCounter {
    target: u32,
    frame_ms: u16,
    phase: CounterPhase,
}

impl StatCounter {
    pub const fn new(target: u32, frame_ms: u16) -> Self {
        Self {
            target,
            frame_ms,
            phase: CounterPhase::Idle,
        }
    }

    pub fn is_started(&self) -> bool {
        !matches!(self.phase, CounterPhase::Idle)
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, CounterPhase::Done)
    }

    pub fn next_frame_ms(&self) -> Option<u64> {
        match self.phase {
            CounterPhase::Counting { next_frame_ms, .. } => Some(next_frame_ms),
            _ => None,
        }
    }

    /// Starts counting; the first frame is shown right away. Later calls are ignored.
    pub fn start(&mut self, now_ms: u64) {
        if self.is_started() {
            return;
        }
        debug!("counter: start toward {}", self.target);
        self.phase = self.enter_frame(1, now_ms);
    }

    /// Advances at most one frame. Returns `true` when the shown value changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let CounterPhase::Counting {
            frame,
            next_frame_ms,
        } = self.phase
        else {
            return false;
        };

        if now_ms < next_frame_ms {
            return false;
        }

        self.phase = self.enter_frame(frame.saturating_add(1), now_ms);
        true
    }

    /// Number currently shown. Before counting starts the target is shown as-is.
    pub fn value(&self) -> u32 {
        match self.phase {
            CounterPhase::Idle | CounterPhase::Done => self.target,
            CounterPhase::Counting { frame, .. } => frame_value(self.target, frame),
        }
    }

    fn enter_frame(&self, frame: u8, now_ms: u64) -> CounterPhase {
        if self.target == 0 || frame >= COUNTER_FRAMES {
            CounterPhase::Done
        } else {
            CounterPhase::Counting {
                frame,
                next_frame_ms: now_ms.saturating_add(self.frame_ms as u64),
            }
        }
    }
}

/// `round(target * frame / COUNTER_FRAMES)`, halves rounding up.
fn frame_value(target: u32, frame: u8) -> u32 {
    let frames = COUNTER_FRAMES as u64;
    let scaled = target as u64 * frame as u64 * 2 + frames;
    (scaled / (2 * frames)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_target_until_started() {
        let counter = StatCounter::new(50, 16);
        assert_eq!(counter.value(), 50);
        assert!(!counter.is_started());
    }

    #[test]
    fn counts_up_one_frame_per_interval() {
        let mut counter = StatCounter::new(100, 16);
        counter.start(1_000);
        assert_eq!(counter.value(), 2);
        assert_eq!(counter.next_frame_ms(), Some(1_016));

        assert!(!counter.tick(1_010));
        assert!(counter.tick(1_016));
        assert_eq!(counter.value(), 4);

        // A late tick still advances a single frame.
        assert!(counter.tick(5_000));
        assert_eq!(counter.value(), 6);
    }

    #[test]
    fn lands_exactly_on_target() {
        let mut counter = StatCounter::new(7, 16);
        counter.start(0);
        let mut now = 0;
        let mut frames = 1;
        while !counter.is_done() {
            now += 16;
            counter.tick(now);
            frames += 1;
            assert!(counter.value() <= 7);
        }
        assert_eq!(frames, COUNTER_FRAMES as usize);
        assert_eq!(counter.value(), 7);
        assert!(!counter.tick(now + 1_000));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = StatCounter::new(0, 16);
        counter.start(0);
        assert!(counter.is_done());
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn rounding_matches_halfway_up() {
        assert_eq!(frame_value(3, 25), 2);
        assert_eq!(frame_value(3, 8), 0);
        assert_eq!(frame_value(3, 9), 1);
    }
}
