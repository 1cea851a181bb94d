use std::cell::Cell;

/// Collects diagnostics over a single parse.
///
/// Parsers never consult the tracker to make decisions; it only observes where primitive
/// matchers failed and whether the nesting limit was reached, so that a failed parse can be
/// reported with a best-effort offset.
#[derive(Debug, Default)]
pub struct FailureTracker {
    furthest: Cell<Option<usize>>,
    depth_exceeded: Cell<bool>,
}

impl FailureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_failure(&self, offset: usize) {
        if self.furthest.get().map_or(true, |furthest| offset > furthest) {
            self.furthest.set(Some(offset));
        }
    }

    pub(crate) fn record_depth_exceeded(&self) {
        self.depth_exceeded.set(true);
    }

    /// The largest offset at which a primitive matcher failed, if any failed at all.
    pub fn furthest_failure(&self) -> Option<usize> {
        self.furthest.get()
    }

    pub fn depth_exceeded(&self) -> bool {
        self.depth_exceeded.get()
    }
}

#[cfg(test)]
mod tests {
    use super::FailureTracker;

    #[test]
    fn keeps_the_furthest_offset() {
        let tracker = FailureTracker::new();
        assert_eq!(tracker.furthest_failure(), None);

        tracker.record_failure(3);
        tracker.record_failure(1);
        assert_eq!(tracker.furthest_failure(), Some(3));

        tracker.record_failure(0);
        tracker.record_failure(7);
        assert_eq!(tracker.furthest_failure(), Some(7));
        assert!(!tracker.depth_exceeded());
    }
}
