#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Core machinery for Vista, a lazy sequence-view library.
//!
//! Everything here is demand-driven: a view is a value wrapping a cursor
//! plus whatever configuration the view needs, and no element is touched
//! until a consumer pulls it. Views are as cheap to copy as their cursor.
//!
//! The pieces:
//!
//! - [`seq`]/[`Seq`] — the entry point into the view world and the wrapper
//!   all adaptors compose on.
//! - [`Bounded`] — the hand-built "at most N elements" view, with its
//!   [`bounded`], [`counted`] and checked [`exactly`] constructors.
//! - [`views`] — adaptor closures (`take`, `skip`, `filter`, ...) and the
//!   pipe composition they plug into.
//! - [`algo`] — whole-sequence algorithms (equality, lexicographic
//!   comparison, comparator-driven sorting).
//! - [`order`] — composable ordering strategies for those algorithms.

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly so that modules can uniformly refer to
// these whether or not std is linked.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{string::String, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod algo;
pub mod bounded;
pub mod error;
pub mod order;
pub mod seq;
pub mod split;
pub mod views;

pub use bounded::{Bounded, bounded, counted, exactly};
pub use error::LengthError;
pub use seq::{IntoSeq, Seq, seq};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
