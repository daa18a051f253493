//! Vista - lazy, composable views over sequences
//!
//! # Overview
//!
//! Vista wraps any iterable in a cheap, lazy view and lets deferred
//! adaptor closures compose onto it with the `|` operator. Nothing is
//! computed until a consumer pulls elements. Common use cases include:
//!
//! - Bounding work over large or infinite sequences
//! - Building reusable, named processing stages
//! - Sorting and comparing with composable ordering strategies
//!
//! # Quick Start
//!
//! ```
//! use vista::prelude::*;
//!
//! let numbers = [2, 3, 5, 6, 7, 8, 9];
//!
//! // Each stage is lazy; only the two surviving elements are ever looked at
//! // past the filter.
//! let odds = seq(&numbers) | filter(|&&n| n % 2 == 1) | take(2);
//! assert_eq!(odds.to_vec(), [&3, &5]);
//!
//! // Closures are plain values: build one, apply it later, reuse it.
//! let first_two = take(2);
//! assert_eq!((seq(1..) | first_two).to_vec(), [1, 2]);
//! assert_eq!((seq("abc".chars()) | first_two).to_vec(), ['a', 'b']);
//! ```
//!
//! # Deferred and immediate construction
//!
//! Every deferred closure has an immediate counterpart. `take(n)` waits for
//! a sequence; [`bounded`] takes the sequence up front. Both produce the
//! same view:
//!
//! ```
//! use vista::prelude::*;
//!
//! let source = [1, 2, 3, 4];
//! assert_eq!(seq(source) | take(3), bounded(source, 3));
//! ```
//!
//! # Checked construction
//!
//! Counts saturate by default: asking for more elements than exist yields
//! what exists. When a caller needs the count honored exactly, [`exactly`]
//! verifies availability and reports the shortfall:
//!
//! ```
//! use vista::{LengthError, exactly};
//!
//! assert!(exactly("vista".chars(), 3).is_ok());
//! assert_eq!(
//!     exactly("ab".chars(), 5).unwrap_err(),
//!     LengthError { requested: 5, available: 2 },
//! );
//! ```
//!
//! # Ordering strategies
//!
//! ```
//! use vista::algo::sort_by;
//! use vista::order::by_key;
//!
//! let mut books = [
//!     ("Functional programming in practice", "978-3-20-148410-0"),
//!     ("Effective engineering", "978-3-16-148410-0"),
//! ];
//! sort_by(&mut books, by_key(|book: &(&str, &str)| book.0));
//! assert_eq!(books[0].0, "Effective engineering");
//! ```

// Re-export the public API from vista_core
pub use vista_core::{
    Bounded, IntoSeq, LengthError, Seq, bounded, counted, exactly, seq,
};

// Re-export the module namespaces
pub use vista_core::{algo, order, views};

/// The common imports for pipeline-building code.
pub mod prelude {
    pub use vista_core::views::{filter, map, skip, skip_while, split, take, take_while};
    pub use vista_core::{IntoSeq, Seq, bounded, counted, seq};
}
