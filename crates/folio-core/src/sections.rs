//! Scroll-driven active section selection.

use heapless::Vec;
use log::debug;

pub const MAX_REGIONS: usize = 16;
pub const MAX_NAV_ENTRIES: usize = 16;

/// Labeled vertical span of the page, in layout units.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Region<'a> {
    pub id: &'a str,
    pub start: i32,
    pub height: i32,
}

impl<'a> Region<'a> {
    pub const fn new(id: &'a str, start: i32, height: i32) -> Self {
        Self { id, start, height }
    }

    /// Half-open containment: `start <= probe < start + height`.
    pub fn contains(&self, probe: i64) -> bool {
        let start = self.start as i64;
        probe >= start && probe < start + self.height as i64
    }
}

/// Receives the selection state of every navigation entry.
pub trait SelectionSink {
    fn set_selected(&mut self, entry: usize, selected: bool);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TrackerConfig {
    /// Lookahead added to the scroll offset, covering the fixed navbar.
    pub bias: i32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { bias: 100 }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrackerError {
    TooManyRegions,
    TooManyNavEntries,
    NegativeHeight { index: usize },
}

#[derive(Clone, Debug)]
pub struct ActiveSectionTracker<'a> {
    regions: Vec<Region<'a>, MAX_REGIONS>,
    nav: Vec<&'a str, MAX_NAV_ENTRIES>,
    config: TrackerConfig,
    current: Option<&'a str>,
}

impl<'a> ActiveSectionTracker<'a> {
    /// `nav` lists the region id each navigation entry points at.
    pub fn new(
        regions: &[Region<'a>],
        nav: &[&'a str],
        config: TrackerConfig,
    ) -> Result<Self, TrackerError> {
        if let Some(index) = regions.iter().position(|region| region.height < 0) {
            return Err(TrackerError::NegativeHeight { index });
        }

        let regions = Vec::from_slice(regions).map_err(|_| TrackerError::TooManyRegions)?;
        let nav = Vec::from_slice(nav).map_err(|_| TrackerError::TooManyNavEntries)?;

        Ok(Self {
            regions,
            nav,
            config,
            current: None,
        })
    }

    pub fn current(&self) -> Option<&'a str> {
        self.current
    }

    pub fn region(&self, id: &str) -> Option<&Region<'a>> {
        self.regions.iter().find(|region| region.id == id)
    }

    pub fn update(&mut self, scroll_offset: i32) -> Option<&'a str> {
        let probe = scroll_offset as i64 + self.config.bias as i64;

        let mut matched = None;
        for region in &self.regions {
            if region.contains(probe) {
                matched = Some(region.id);
            }
        }

        if matched != self.current {
            debug!("sections: active {:?} -> {:?}", self.current, matched);
        }
        self.current = matched;
        matched
    }

    pub fn is_selected(&self, entry: usize) -> bool {
        match (self.current, self.nav.get(entry)) {
            (Some(current), Some(target)) => current == *target,
            _ => false,
        }
    }

    /// Rewrites the selection of every navigation entry, selected or not.
    pub fn apply_selection<S: SelectionSink>(&self, sink: &mut S) {
        for entry in 0..self.nav.len() {
            sink.set_selected(entry, self.is_selected(entry));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: [Region<'static>; 3] = [
        Region::new("a", 0, 100),
        Region::new("b", 100, 100),
        Region::new("c", 200, 100),
    ];

    #[derive(Default)]
    struct Links {
        selected: [bool; 4],
        writes: usize,
    }

    impl SelectionSink for Links {
        fn set_selected(&mut self, entry: usize, selected: bool) {
            self.selected[entry] = selected;
            self.writes += 1;
        }
    }

    fn tracker() -> ActiveSectionTracker<'static> {
        ActiveSectionTracker::new(&PAGE, &["a", "b", "c"], TrackerConfig::default()).unwrap()
    }

    #[test]
    fn probe_is_biased_by_navbar_lookahead() {
        let mut tracker = tracker();
        assert_eq!(tracker.update(0), Some("b"));
        assert_eq!(tracker.update(150), Some("c"));
        assert_eq!(tracker.update(-1000), None);
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn region_end_is_exclusive() {
        let mut tracker = tracker();
        assert_eq!(tracker.update(99), Some("b"));
        assert_eq!(tracker.update(199), Some("c"));
        assert_eq!(tracker.update(200), None);
    }

    #[test]
    fn repeated_updates_are_idempotent() {
        let mut tracker = tracker();
        let mut first = Links::default();
        let mut second = Links::default();

        tracker.update(150);
        tracker.apply_selection(&mut first);
        tracker.update(150);
        tracker.apply_selection(&mut second);

        assert_eq!(tracker.current(), Some("c"));
        assert_eq!(first.selected, second.selected);
        assert_eq!(first.selected, [false, false, true, false]);
    }

    #[test]
    fn selection_is_fully_rewritten_each_time() {
        let mut tracker = tracker();
        let mut links = Links::default();

        tracker.update(0);
        tracker.apply_selection(&mut links);
        assert_eq!(links.selected, [false, true, false, false]);

        tracker.update(-500);
        tracker.apply_selection(&mut links);
        assert_eq!(links.selected, [false; 4]);
        assert_eq!(links.writes, 6);
    }

    #[test]
    fn overlapping_regions_prefer_last_match() {
        let regions = [Region::new("x", 0, 200), Region::new("y", 50, 200)];
        let mut tracker =
            ActiveSectionTracker::new(&regions, &[], TrackerConfig { bias: 0 }).unwrap();
        assert_eq!(tracker.update(100), Some("y"));
        assert_eq!(tracker.update(10), Some("x"));
    }

    #[test]
    fn empty_regions_never_match() {
        let mut tracker =
            ActiveSectionTracker::new(&[], &["", "home"], TrackerConfig::default()).unwrap();
        let mut links = Links::default();
        assert_eq!(tracker.update(0), None);
        tracker.apply_selection(&mut links);
        assert_eq!(links.selected, [false; 4]);
    }

    #[test]
    fn extreme_offsets_do_not_overflow() {
        let regions = [Region::new("end", i32::MAX - 10, i32::MAX)];
        let mut tracker =
            ActiveSectionTracker::new(&regions, &[], TrackerConfig::default()).unwrap();
        assert_eq!(tracker.update(i32::MAX), Some("end"));
        assert_eq!(tracker.update(i32::MIN), None);
    }

    #[test]
    fn rejects_invalid_layout() {
        let regions = [Region::new("a", 0, 10), Region::new("b", 10, -1)];
        assert_eq!(
            ActiveSectionTracker::new(&regions, &[], TrackerConfig::default()).unwrap_err(),
            TrackerError::NegativeHeight { index: 1 }
        );

        let crowded = [Region::new("a", 0, 10); MAX_REGIONS + 1];
        assert_eq!(
            ActiveSectionTracker::new(&crowded, &[], TrackerConfig::default()).unwrap_err(),
            TrackerError::TooManyRegions
        );
    }
}
