use std::ops::Range;

/// The working line buffer for one render pass.
///
/// Each slot holds a borrowed source line until a multi-line construct folds it
/// into an emitted fragment, at which point the slot is consumed (`None`).
/// Consumed slots read back as the empty string and are never re-populated.
#[derive(Debug, Clone)]
pub struct LineBuffer<'a> {
    slots: Vec<Option<&'a str>>,
}

impl<'a> LineBuffer<'a> {
    /// Splits `text` on `\n`. An empty input yields a single empty line.
    pub fn new(text: &'a str) -> Self {
        Self {
            slots: text.split('\n').map(Some).collect(),
        }
    }

    /// Number of source lines, consumed or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns the line at `index`. Consumed and out-of-range slots read as `""`.
    pub fn get(&self, index: usize) -> &'a str {
        self.slots.get(index).copied().flatten().unwrap_or("")
    }

    /// The line immediately before `index`, if there is one.
    pub fn prev(&self, index: usize) -> Option<&'a str> {
        index.checked_sub(1).map(|i| self.get(i))
    }

    /// The line immediately after `index`, if there is one.
    pub fn next(&self, index: usize) -> Option<&'a str> {
        let i = index.checked_add(1)?;
        (i < self.len()).then(|| self.get(i))
    }

    #[cfg(test)]
    pub fn is_consumed(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Marks every slot in `range` consumed, clamped to the buffer length.
    pub fn consume_range(&mut self, range: Range<usize>) {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        for slot in &mut self.slots[start..end] {
            *slot = None;
        }
    }

    /// Index of the first line at or after `start` satisfying `pred`.
    pub fn position_from(&self, start: usize, pred: impl Fn(&str) -> bool) -> Option<usize> {
        (start..self.len()).find(|&i| pred(self.get(i)))
    }
}
