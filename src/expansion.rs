//! Ranked query expansion result sets.
//!
//! A query expansion producer (relevance feedback, co-occurrence statistics,
//! ...) ranks candidate terms and hands them, heaviest first, to an
//! [`ExpansionSetBuilder`]. The resulting [`ExpansionSet`] is immutable and
//! shared: cloning it or taking a cursor from it never copies the terms.
//!
//! # Example
//!
//! ```
//! use eset::expansion::ExpansionSet;
//!
//! let set = ExpansionSet::from_sorted([("cat", 5.0), ("dog", 3.2), ("fish", 1.1)], 10);
//!
//! let mut cursor = set.begin();
//! let mut seen = Vec::new();
//! while cursor != set.end() {
//!     seen.push(cursor.term().to_string());
//!     cursor.advance();
//! }
//! assert_eq!(seen, ["cat", "dog", "fish"]);
//! ```

mod builder;
mod config;
mod cursor;
mod decider;
mod iter;
mod set;
mod term;

pub use builder::ExpansionSetBuilder;
pub use config::ExpansionConfig;
pub use cursor::ExpansionSetCursor;
pub use decider::{AndDecider, ExpandDecider, PrefixDecider, TermsDecider};
pub use iter::{Cursors, Iter};
pub use set::ExpansionSet;
pub use term::ExpansionTerm;
