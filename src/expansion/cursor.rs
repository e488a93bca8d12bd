//! Cursor over an [`ExpansionSet`].

use std::fmt;
use std::hash::{Hash, Hasher};

use super::set::ExpansionSet;
use super::term::ExpansionTerm;

/// A position within one [`ExpansionSet`] snapshot.
///
/// The cursor holds its own share of the set it was created from, so it stays
/// valid however the originating handle is later swapped or dropped.
///
/// The position is stored as the number of steps remaining until the end of
/// the set, not as an absolute rank. `end()` is therefore always offset 0 and
/// `begin()` is offset `size()`. Two consequences follow:
///
/// * cursors compare equal iff their offsets are equal, even when they were
///   created from different sets;
/// * a default cursor (no set, offset 0) compares equal to any `end()`.
///
/// # Contract
///
/// Stepping and dereferencing are unchecked in release builds. Advancing past
/// the end, retreating before the beginning, or reading the term of an end or
/// unbound cursor are caller errors. Reads on such a cursor panic on the slice
/// bounds check; steps wrap and leave the cursor unusable. Debug builds assert.
#[derive(Debug, Clone, Default)]
pub struct ExpansionSetCursor {
    set: ExpansionSet,
    remaining: usize,
}

impl ExpansionSetCursor {
    pub(crate) fn new(set: ExpansionSet, remaining: usize) -> Self {
        ExpansionSetCursor { set, remaining }
    }

    /// The term text at the current position.
    ///
    /// # Contract
    ///
    /// The cursor must be positioned on a term (`0 < offset <= size`).
    pub fn term(&self) -> &str {
        &self.entry().text
    }

    /// The weight at the current position.
    ///
    /// # Contract
    ///
    /// Same as [`term`](Self::term).
    pub fn weight(&self) -> f64 {
        self.entry().weight
    }

    /// The full record at the current position.
    ///
    /// # Contract
    ///
    /// Same as [`term`](Self::term).
    pub fn entry(&self) -> &ExpansionTerm {
        debug_assert!(
            self.is_dereferenceable(),
            "dereferencing expansion set cursor at offset {} of {}",
            self.remaining,
            self.set.size()
        );
        &self.set.terms()[self.rank()]
    }

    /// The record at the current position, or `None` at the end, on an
    /// unbound cursor, or after stepping out of range.
    pub fn try_entry(&self) -> Option<&ExpansionTerm> {
        if self.is_dereferenceable() {
            Some(&self.set.terms()[self.rank()])
        } else {
            None
        }
    }

    /// Whether the cursor currently sits on a term.
    pub fn is_dereferenceable(&self) -> bool {
        self.remaining > 0 && self.remaining <= self.set.size()
    }

    /// Whether the cursor is at offset 0.
    pub fn is_end(&self) -> bool {
        self.remaining == 0
    }

    /// Rank of the current position; 0 is the highest weighted term.
    pub fn rank(&self) -> usize {
        self.set.size().wrapping_sub(self.remaining)
    }

    /// Number of positions between this cursor and the end.
    pub fn offset_from_end(&self) -> usize {
        self.remaining
    }

    /// The snapshot this cursor pins.
    pub fn set(&self) -> &ExpansionSet {
        &self.set
    }

    /// Move to the next (lower weighted) term.
    pub fn advance(&mut self) -> &mut Self {
        debug_assert!(self.remaining > 0, "advancing past the end");
        self.remaining = self.remaining.wrapping_sub(1);
        self
    }

    /// Move to the next term, returning the cursor as it was before the step.
    pub fn post_advance(&mut self) -> Self {
        let previous = self.clone();
        self.advance();
        previous
    }

    /// Move to the previous (higher weighted) term.
    pub fn retreat(&mut self) -> &mut Self {
        debug_assert!(
            self.remaining < self.set.size(),
            "retreating before the beginning"
        );
        self.remaining = self.remaining.wrapping_add(1);
        self
    }

    /// Move to the previous term, returning the cursor as it was before the
    /// step.
    pub fn post_retreat(&mut self) -> Self {
        let previous = self.clone();
        self.retreat();
        previous
    }
}

/// Compares offsets only; the pinned sets are not consulted.
impl PartialEq for ExpansionSetCursor {
    fn eq(&self, other: &Self) -> bool {
        self.remaining == other.remaining
    }
}

impl Eq for ExpansionSetCursor {}

impl Hash for ExpansionSetCursor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.remaining.hash(state);
    }
}

/// `ResultSetCursor(<offset>)`, or `ResultSetCursor(<offset>, <term>:<weight>)`
/// when positioned on a term.
impl fmt::Display for ExpansionSetCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_entry() {
            Some(term) => write!(f, "ResultSetCursor({}, {})", self.remaining, term),
            None => write!(f, "ResultSetCursor({})", self.remaining),
        }
    }
}
