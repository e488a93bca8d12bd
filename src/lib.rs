//! # eset
//!
//! Shared, immutable ranked sets of query expansion terms.
//!
//! ## Features
//!
//! - Cheap, thread-safe sharing of a frozen ranked term list
//! - Cursors that pin their own snapshot and survive handle swaps
//! - Producer-side builder with selection limits and expand deciders
//! - Canonical textual description for diagnostics

pub mod error;
pub mod expansion;

pub mod prelude {
    pub use crate::error::{EsetError, Result};
    pub use crate::expansion::{
        AndDecider, ExpandDecider, ExpansionConfig, ExpansionSet, ExpansionSetBuilder,
        ExpansionSetCursor, ExpansionTerm, PrefixDecider, TermsDecider,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
