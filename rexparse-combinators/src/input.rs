use crate::FailureTracker;

/// An immutable cursor over a buffered rune sequence.
///
/// Advancing never touches the cursor it was called on, so any number of alternatives can
/// re-read the same position.
#[derive(Clone, Copy, Debug)]
pub struct Input<'a> {
    runes: &'a [char],
    offset: usize,
    depth: usize,
    max_depth: usize,
    tracker: Option<&'a FailureTracker>,
}

impl<'a> Input<'a> {
    pub fn new(runes: &'a [char]) -> Self {
        Self {
            runes,
            offset: 0,
            depth: 0,
            max_depth: usize::MAX,
            tracker: None,
        }
    }

    /// Limits how deeply [`nested`](crate::nested) parsers may recurse.
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    /// Reports failures to `tracker` for the rest of this parse.
    pub fn tracked(self, tracker: &'a FailureTracker) -> Self {
        Self {
            tracker: Some(tracker),
            ..self
        }
    }

    /// The current rune and its offset, or `None` at the end of input.
    pub fn current(&self) -> Option<(char, usize)> {
        self.runes.get(self.offset).map(|&rune| (rune, self.offset))
    }

    /// The cursor past the current rune, or `None` if the input is exhausted.
    pub fn advance(&self) -> Option<Input<'a>> {
        if self.offset < self.runes.len() {
            Some(Self {
                offset: self.offset + 1,
                ..*self
            })
        } else {
            None
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.offset >= self.runes.len()
    }

    pub fn remaining(&self) -> &'a [char] {
        &self.runes[self.offset.min(self.runes.len())..]
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn fail(&self) {
        if let Some(tracker) = self.tracker {
            tracker.record_failure(self.offset);
        }
    }

    /// Enters one nesting level, failing once the limit is reached.
    pub(crate) fn descend(&self) -> Option<Input<'a>> {
        if self.depth >= self.max_depth {
            if let Some(tracker) = self.tracker {
                tracker.record_depth_exceeded();
            }
            return None;
        }
        Some(Self {
            depth: self.depth + 1,
            ..*self
        })
    }

    pub(crate) fn at_depth(&self, depth: usize) -> Input<'a> {
        Self { depth, ..*self }
    }
}
