//! Sticky "fade in once visible" tracking for page blocks.

use heapless::Vec;

pub const MAX_REVEAL_TARGETS: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RevealConfig {
    /// Fraction of a block that must be inside the viewport, in percent.
    pub threshold_pct: u8,
    /// Pixels trimmed off the bottom of the viewport before testing.
    pub bottom_margin: i32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold_pct: 10,
            bottom_margin: 50,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RevealTarget {
    pub start: i32,
    pub height: i32,
}

impl RevealTarget {
    pub const fn new(start: i32, height: i32) -> Self {
        Self { start, height }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CapacityExceeded;

#[derive(Clone, Debug)]
pub struct RevealSet {
    targets: Vec<(RevealTarget, bool), MAX_REVEAL_TARGETS>,
    config: RevealConfig,
}

impl RevealSet {
    pub fn new(targets: &[RevealTarget], config: RevealConfig) -> Result<Self, CapacityExceeded> {
        let mut stored = Vec::new();
        for target in targets {
            stored
                .push((*target, false))
                .map_err(|_| CapacityExceeded)?;
        }
        Ok(Self {
            targets: stored,
            config,
        })
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.targets.get(index).is_some_and(|(_, shown)| *shown)
    }

    pub fn revealed_count(&self) -> usize {
        self.targets.iter().filter(|(_, shown)| *shown).count()
    }

    /// Marks every block now intersecting the viewport. Returns how many were
    /// revealed by this call.
    pub fn observe(&mut self, scroll_offset: i32, viewport_height: i32) -> usize {
        let top = scroll_offset as i64;
        let bottom = top + viewport_height as i64 - self.config.bottom_margin as i64;
        let threshold = self.config.threshold_pct as i64;

        let mut newly = 0usize;
        for (target, shown) in self.targets.iter_mut() {
            if *shown {
                continue;
            }
            if intersects(*target, top, bottom, threshold) {
                *shown = true;
                newly += 1;
            }
        }
        newly
    }
}

/// Whether at least `threshold_pct` of `target` lies inside `[top, bottom)`.
pub fn intersects(target: RevealTarget, top: i64, bottom: i64, threshold_pct: i64) -> bool {
    let start = target.start as i64;
    if target.height <= 0 {
        return start >= top && start < bottom;
    }

    let end = start + target.height as i64;
    let overlap = end.min(bottom) - start.max(top);
    overlap > 0 && overlap * 100 >= target.height as i64 * threshold_pct
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_threshold_is_inside_viewport() {
        let mut set = RevealSet::new(
            &[RevealTarget::new(900, 200), RevealTarget::new(2_000, 100)],
            RevealConfig::default(),
        )
        .unwrap();

        // Viewport 0..950 after the bottom margin: 50 of 200 visible = 25%.
        assert_eq!(set.observe(0, 1_000), 1);
        assert!(set.is_revealed(0));
        assert!(!set.is_revealed(1));

        assert_eq!(set.observe(0, 1_000), 0);
        assert_eq!(set.observe(1_500, 1_000), 1);
        assert_eq!(set.revealed_count(), 2);
    }

    #[test]
    fn reveal_is_sticky() {
        let mut set =
            RevealSet::new(&[RevealTarget::new(0, 100)], RevealConfig::default()).unwrap();
        set.observe(0, 800);
        set.observe(10_000, 800);
        assert!(set.is_revealed(0));
    }

    #[test]
    fn sliver_below_threshold_stays_hidden() {
        // 5 of 100 visible, threshold 10%.
        assert!(!intersects(RevealTarget::new(945, 100), 0, 950, 10));
        assert!(intersects(RevealTarget::new(940, 100), 0, 950, 10));
    }

    #[test]
    fn half_threshold_for_stat_blocks() {
        assert!(!intersects(RevealTarget::new(0, 100), 51, 1_000, 50));
        assert!(intersects(RevealTarget::new(0, 100), 50, 1_000, 50));
    }

    #[test]
    fn capacity_is_bounded() {
        let targets = [RevealTarget::new(0, 1); MAX_REVEAL_TARGETS + 1];
        assert!(RevealSet::new(&targets, RevealConfig::default()).is_err());
    }
}
