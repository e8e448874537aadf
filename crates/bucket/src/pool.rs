//! The random-extraction pool.

use std::fmt;

use types::BallNumber;

use crate::error::{BucketError, Result};
use crate::source::{RandomSource, StdRngSource};

/// Shrink-only multiset with uniform random extraction.
///
/// # Lifecycle
///
/// A pool is built once from its items, loses one item per
/// [`extract_random`](Self::extract_random) call and is never repopulated.
/// [`duplicate`](Self::duplicate) is the only way to obtain a second pool
/// with the same contents, and the copy shares no storage with the source.
pub struct RandomPool<T> {
    items: Vec<T>,
    source: Box<dyn RandomSource>,
}

impl<T: Clone> RandomPool<T> {
    /// Create a pool drawing from `source`.
    pub fn new(items: Vec<T>, source: Box<dyn RandomSource>) -> Self {
        Self { items, source }
    }

    /// Create a pool seeded from OS entropy.
    pub fn from_items(items: Vec<T>) -> Self {
        Self::new(items, Box::new(StdRngSource::from_os()))
    }

    /// Independent copy of the current contents with a forked random source.
    ///
    /// Extracting from either pool afterwards has no effect on the other.
    pub fn duplicate(&mut self) -> Self {
        Self {
            items: self.items.clone(),
            source: self.source.fork(),
        }
    }

    /// Remove and return a uniformly chosen item.
    ///
    /// # Errors
    /// `BucketError::EmptyPool` when no items remain. The pool is unchanged.
    pub fn extract_random(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(BucketError::EmptyPool);
        }
        let index = self.source.next_index(self.items.len());
        // Order-preserving removal keeps scripted sources aligned with the template order
        Ok(self.items.remove(index))
    }

    /// Number of remaining items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remaining items, in their current internal order.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl RandomPool<BallNumber> {
    /// Pool of consecutive numbers `[first, first + count)`.
    ///
    /// A non-positive `count` produces an empty pool; extraction from it
    /// fails immediately. Range validation is left to the caller.
    ///
    /// # Example
    /// `sequential(2, 5, ..)` holds 2, 3, 4, 5 and 6.
    pub fn sequential(first: i64, count: i64, source: Box<dyn RandomSource>) -> Self {
        let items = if count > 0 {
            (first..first.saturating_add(count)).map(BallNumber).collect()
        } else {
            Vec::new()
        };
        Self::new(items, source)
    }
}

impl<T: fmt::Debug> fmt::Debug for RandomPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomPool")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
