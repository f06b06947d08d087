use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// One timestamped observation of a metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Local>,
    pub value: f64,
}

/// Half-open index range `[start, end)` into a [`SampleBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Index of the newest sample in the range.
    pub fn newest(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end - 1)
    }

    /// Column of buffer index `idx` (which must lie inside the range).
    pub fn column(&self, idx: usize) -> usize {
        idx - self.start
    }
}

/// Bounded FIFO of samples; the oldest sample is evicted once full.
///
/// Insertion order is chronological order. Readers only ever get shared
/// borrows, so the sequence can't be mutated from outside.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl SampleBuffer {
    /// A capacity of zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record `value` with the current time.
    pub fn push(&mut self, value: f64) {
        self.push_at(value, Local::now());
    }

    /// Record `value` with an explicit timestamp, evicting the oldest if at capacity.
    pub fn push_at(&mut self, value: f64, timestamp: DateTime<Local>) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { timestamp, value });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, idx: usize) -> Option<&Sample> {
        self.samples.get(idx)
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Sample> + ExactSizeIterator + '_ {
        self.samples.iter()
    }

    /// Values, oldest first.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        self.samples.iter().map(|s| s.value)
    }

    /// Timestamps, parallel to [`values`](Self::values).
    pub fn timestamps(
        &self,
    ) -> impl DoubleEndedIterator<Item = DateTime<Local>> + ExactSizeIterator + '_ {
        self.samples.iter().map(|s| s.timestamp)
    }

    /// The newest `columns` samples (all of them if fewer are buffered).
    pub fn visible(&self, columns: usize) -> VisibleRange {
        let end = self.samples.len();
        VisibleRange {
            start: end.saturating_sub(columns),
            end,
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
