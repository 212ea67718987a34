//! Capacity-bounded trace of recent samples.
//!
//! A [`TraceBuffer`] keeps the newest `capacity` points of one path in
//! insertion order. Appending to a full buffer evicts the oldest point first,
//! so the rendered path is a sliding window over the motion.

use std::collections::vec_deque::Iter;
use std::collections::VecDeque;
use thiserror::Error;

use crate::constants::TRACE_CAPACITY;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraceError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraceBuffer<T> {
    points: VecDeque<T>,
    capacity: usize,
}

impl<T> TraceBuffer<T> {
    /// Create an empty buffer. A zero capacity is rejected. Storage grows on
    /// demand past the default trace length.
    pub fn new(capacity: usize) -> Result<Self, TraceError> {
        if capacity == 0 {
            return Err(TraceError::InvalidConfiguration(
                "trace capacity must be greater than 0".into(),
            ));
        }
        Ok(Self {
            points: VecDeque::with_capacity(capacity.min(TRACE_CAPACITY)),
            capacity,
        })
    }

    /// Create a buffer from a signed capacity, as read from user input.
    pub fn with_requested_capacity(requested: i64) -> Result<Self, TraceError> {
        if requested <= 0 {
            return Err(TraceError::InvalidConfiguration(format!(
                "trace capacity must be greater than 0 (got {requested})"
            )));
        }
        let capacity = usize::try_from(requested).map_err(|_| {
            TraceError::InvalidConfiguration(format!("trace capacity {requested} is too large"))
        })?;
        Self::new(capacity)
    }

    /// Add `point` as the newest element, evicting the oldest while full.
    pub fn append(&mut self, point: T) {
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn extend<I: IntoIterator<Item = T>>(&mut self, points: I) {
        for p in points {
            self.append(p);
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<&T> {
        self.points.back()
    }

    pub fn oldest(&self) -> Option<&T> {
        self.points.front()
    }
}

impl<T: Clone> TraceBuffer<T> {
    /// Owned copy of the contents, oldest first.
    pub fn as_sequence(&self) -> Vec<T> {
        self.points.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a TraceBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_until_capacity() {
        let mut buf = TraceBuffer::new(4).unwrap();
        assert!(buf.is_empty());
        for i in 0..4 {
            buf.append(i);
            assert_eq!(buf.len(), i + 1);
        }
        buf.append(4);
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.oldest(), Some(&1));
        assert_eq!(buf.latest(), Some(&4));
    }

    #[test]
    fn duplicates_are_kept() {
        let mut buf = TraceBuffer::new(3).unwrap();
        buf.append(7);
        buf.append(7);
        assert_eq!(buf.as_sequence(), vec![7, 7]);
    }

    #[test]
    fn extend_keeps_only_the_tail() {
        let mut buf = TraceBuffer::new(3).unwrap();
        buf.extend(0..10);
        assert_eq!(buf.as_sequence(), vec![7, 8, 9]);
    }

    #[test]
    fn capacity_of_one_holds_latest() {
        let mut buf = TraceBuffer::new(1).unwrap();
        buf.append('a');
        buf.append('b');
        assert_eq!(buf.as_sequence(), vec!['b']);
    }
}
