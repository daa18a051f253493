//! The bounded view: at most a fixed number of elements of a base cursor.
//!
//! This is the one adaptor built by hand rather than layered on a
//! `core::iter` primitive, because it is the composition anchor of the
//! library: [`views::take`](crate::views::take) defers to it, and the
//! checked [`exactly`] constructor refines it.

use core::iter::FusedIterator;

use crate::error::LengthError;
use crate::seq::{IntoSeq, Seq};

/// A lazy view over the first `count` elements of a base cursor.
///
/// Construction is O(1) and touches no elements; iteration stops after
/// `count` elements or when the base runs out, whichever comes first. The
/// view stores only the base cursor and the remaining count, so copying it
/// costs what copying the cursor costs.
///
/// # Examples
///
/// ```
/// use vista_core::Bounded;
///
/// let prefix: Vec<_> = Bounded::new("vista".chars(), 3).collect();
/// assert_eq!(prefix, ['v', 'i', 's']);
/// ```
#[derive(Clone, Debug)]
pub struct Bounded<I> {
    base: I,
    remaining: usize,
}

// The view is exactly its cursor plus the count, nothing hidden.
static_assertions::assert_eq_size!(
    Bounded<core::slice::Iter<'static, u8>>,
    (core::slice::Iter<'static, u8>, usize)
);

impl<I> Bounded<I> {
    /// Wraps `base`, limiting traversal to at most `count` elements.
    pub fn new(base: I, count: usize) -> Self {
        Self {
            base,
            remaining: count,
        }
    }

    /// How many elements this view may still yield, regardless of how many
    /// the base actually holds.
    pub fn limit(&self) -> usize {
        self.remaining
    }

    /// Shared access to the underlying cursor.
    pub fn base(&self) -> &I {
        &self.base
    }

    /// Consumes the view, returning the underlying cursor.
    pub fn into_base(self) -> I {
        self.base
    }
}

impl<I: Iterator> Iterator for Bounded<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.base.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.base.size_hint();
        let lower = lower.min(self.remaining);
        let upper = match upper {
            Some(upper) => upper.min(self.remaining),
            None => self.remaining,
        };
        (lower, Some(upper))
    }

    fn nth(&mut self, n: usize) -> Option<I::Item> {
        if n < self.remaining {
            self.remaining -= n + 1;
            self.base.nth(n)
        } else {
            if self.remaining > 0 {
                // Leave the base right past our span so the view stays
                // consistent if the cursor is recovered with `into_base`.
                let _ = self.base.nth(self.remaining - 1);
                self.remaining = 0;
            }
            None
        }
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Bounded<I> {
    fn len(&self) -> usize {
        self.base.len().min(self.remaining)
    }
}

impl<I> DoubleEndedIterator for Bounded<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    fn next_back(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        let bound = self.remaining;
        self.remaining -= 1;
        // Skip whatever the bound cuts off before stepping from the back.
        self.base.nth_back(self.base.len().saturating_sub(bound))
    }
}

impl<I: FusedIterator> FusedIterator for Bounded<I> {}

/// Builds a bounded view over `source` directly.
///
/// This is the immediate counterpart of the deferred
/// [`views::take`](crate::views::take) closure: both produce the same view
/// for the same source and count. A `count` larger than the source yields
/// the whole source; `0` yields an empty view.
///
/// # Examples
///
/// ```
/// use vista_core::bounded;
///
/// assert_eq!(bounded([1, 2, 3], 10).to_vec(), [1, 2, 3]);
/// assert!(bounded([1, 2, 3], 0).is_empty());
/// ```
pub fn bounded<S: IntoSeq>(source: S, count: usize) -> Seq<Bounded<S::Iter>> {
    counted(source.into_seq().into_inner(), count)
}

/// Builds a bounded view from a raw cursor and a count.
///
/// ```
/// use vista_core::counted;
///
/// let word = counted("lazy views".chars(), 4);
/// assert_eq!(word.to_vec(), ['l', 'a', 'z', 'y']);
/// ```
pub fn counted<I: Iterator>(cursor: I, count: usize) -> Seq<Bounded<I>> {
    Seq::from_cursor(Bounded::new(cursor, count))
}

/// Checked variant of [`counted`]: verifies that `count` elements are
/// actually available before committing to the view.
///
/// Requires a `Clone` cursor for the probe pass, so the returned view still
/// starts at the first element. Costs O(count).
///
/// # Errors
///
/// Returns [`LengthError`] when the cursor runs out early.
///
/// ```
/// use vista_core::{LengthError, exactly};
///
/// let err = exactly("ab".chars(), 5).unwrap_err();
/// assert_eq!(err, LengthError { requested: 5, available: 2 });
/// ```
pub fn exactly<I>(cursor: I, count: usize) -> Result<Seq<Bounded<I>>, LengthError>
where
    I: Iterator + Clone,
{
    let available = Bounded::new(cursor.clone(), count).count();
    if available < count {
        tracing::debug!(requested = count, available, "cursor too short for exact view");
        return Err(LengthError {
            requested: count,
            available,
        });
    }
    Ok(counted(cursor, count))
}
