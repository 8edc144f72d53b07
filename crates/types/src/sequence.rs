//! Ordered, owned sequence of sensor readings

use crate::reading::Sample;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered collection of samples of one numeric kind
///
/// Insertion order is preserved and the sequence only grows. Cloning
/// produces a fully independent copy, and `clone_from` reuses the
/// target's allocation before copying the source in.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingSequence<N> {
    values: Vec<N>,
}

impl<N: Sample> ReadingSequence<N> {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append a sample at the tail
    pub fn push(&mut self, value: N) {
        self.values.push(value);
        log::trace!("Reading {} appended ({} total)", value, self.values.len());
    }

    /// Average of all samples using `N`'s division semantics.
    ///
    /// An empty sequence averages to zero rather than failing.
    pub fn average(&self) -> N {
        N::mean(&self.values)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Samples in insertion order
    pub fn as_slice(&self) -> &[N] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.values.iter()
    }
}

impl<N: Clone> Clone for ReadingSequence<N> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.values.clone_from(&source.values);
    }
}

impl<N: Sample> Default for ReadingSequence<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Sample> FromIterator<N> for ReadingSequence<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<N: Sample> Extend<N> for ReadingSequence<N> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, N: Sample> IntoIterator for &'a ReadingSequence<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<N: Sample> fmt::Display for ReadingSequence<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
