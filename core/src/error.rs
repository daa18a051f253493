//! Public error types.
//!
//! The lazy constructors never fail — counts saturate against whatever the
//! source can supply. Only the checked constructor
//! [`exactly`](crate::bounded::exactly) reports, and this is what it
//! reports with.

use thiserror::Error;

/// A checked constructor found fewer elements than requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected at least {requested} element(s), found {available}")]
pub struct LengthError {
    /// How many elements the caller asked for.
    pub requested: usize,
    /// How many the cursor could actually supply.
    pub available: usize,
}
