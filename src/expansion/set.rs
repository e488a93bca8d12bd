//! The shared, immutable expansion result set.
//!
//! An [`ExpansionSet`] is a handle onto frozen storage built once by the
//! producer (see [`ExpansionSetBuilder`]). Cloning a handle only bumps an
//! atomic reference count, so handles and cursors can be copied freely across
//! threads.

use std::fmt;
use std::sync::Arc;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::EsetError;

use super::builder::ExpansionSetBuilder;
use super::config::ExpansionConfig;
use super::cursor::ExpansionSetCursor;
use super::iter::{Cursors, Iter};
use super::term::ExpansionTerm;

/// Frozen storage behind an [`ExpansionSet`].
#[derive(Debug)]
struct SetInternal {
    /// Terms in non-increasing weight order, as supplied by the producer.
    terms: Vec<ExpansionTerm>,
    /// Number of terms that were eligible for selection.
    bound: usize,
}

/// A ranked, fixed-size list of query expansion terms.
///
/// Terms are kept in the order the producer supplied them, which is
/// non-increasing by weight; rank 0 is the most relevant term. The set never
/// changes size after construction.
///
/// A default-constructed set has no storage attached: `size() == 0` and
/// `bound() == 0`.
///
/// # Example
///
/// ```
/// use eset::expansion::ExpansionSet;
///
/// let set = ExpansionSet::from_sorted([("cat", 5.0), ("dog", 3.2), ("fish", 1.1)], 10);
/// assert_eq!(set.size(), 3);
/// assert_eq!(set.bound(), 10);
/// assert_eq!(set.begin().term(), "cat");
/// assert_eq!(set.back().term(), "fish");
/// assert_eq!(set.at(1).weight(), 3.2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "SetRepr", try_from = "SetRepr")]
pub struct ExpansionSet {
    internal: Option<Arc<SetInternal>>,
}

impl ExpansionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from terms already sorted by non-increasing weight.
    ///
    /// Every term is stored, in the order given, whatever its weight: no
    /// threshold or size limit is applied. `bound` should be at least the number of
    /// terms; this is a producer contract and is only checked in debug builds.
    /// Use [`ExpansionSetBuilder::try_build`] to have it checked.
    pub fn from_sorted<I, T>(terms: I, bound: usize) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ExpansionTerm>,
    {
        ExpansionSetBuilder::new()
            .with_config(ExpansionConfig::default())
            .extend(terms)
            .bound(bound)
            .build()
    }

    /// Wrap finished terms in fresh shared storage.
    pub(crate) fn from_parts(terms: Vec<ExpansionTerm>, bound: usize) -> Self {
        ExpansionSet {
            internal: Some(Arc::new(SetInternal { terms, bound })),
        }
    }

    /// Number of terms in the set.
    pub fn size(&self) -> usize {
        self.internal.as_ref().map_or(0, |internal| internal.terms.len())
    }

    /// Alias of [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Whether the set holds no terms.
    pub fn empty(&self) -> bool {
        self.size() == 0
    }

    /// Alias of [`empty`](Self::empty).
    pub fn is_empty(&self) -> bool {
        self.empty()
    }

    /// The largest size this set can have, which is its size: the set is
    /// fixed once created.
    pub fn max_size(&self) -> usize {
        self.size()
    }

    /// Upper bound on the number of terms that were eligible for selection.
    ///
    /// A correctly built set has `bound() >= size()`.
    pub fn bound(&self) -> usize {
        self.internal.as_ref().map_or(0, |internal| internal.bound)
    }

    /// The terms in rank order.
    pub fn terms(&self) -> &[ExpansionTerm] {
        match &self.internal {
            Some(internal) => &internal.terms,
            None => &[],
        }
    }

    /// Exchange the storage of two handles.
    ///
    /// Cursors and clones created earlier keep the storage they were created
    /// from.
    pub fn swap(&mut self, other: &mut ExpansionSet) {
        trace!(
            "swapping expansion sets (sizes {} and {})",
            self.size(),
            other.size()
        );
        std::mem::swap(&mut self.internal, &mut other.internal);
    }

    /// Whether two handles share the same storage.
    ///
    /// Two handles without storage are considered to share it.
    pub fn shares_storage(&self, other: &ExpansionSet) -> bool {
        match (&self.internal, &other.internal) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Cursor at the first (highest weighted) term.
    ///
    /// Equal to [`end`](Self::end) when the set is empty.
    pub fn begin(&self) -> ExpansionSetCursor {
        ExpansionSetCursor::new(self.clone(), self.size())
    }

    /// Cursor one past the last term.
    ///
    /// Retreating from here reaches the last term, so the cursor still pins
    /// this set.
    pub fn end(&self) -> ExpansionSetCursor {
        ExpansionSetCursor::new(self.clone(), 0)
    }

    /// Cursor at rank `i`, where rank 0 is the highest weighted term.
    ///
    /// # Contract
    ///
    /// `i` must be less than [`size`](Self::size). This is not checked in
    /// release builds; the returned cursor for an out-of-range `i` must not be
    /// dereferenced. Use [`get`](Self::get) for a checked lookup.
    pub fn at(&self, i: usize) -> ExpansionSetCursor {
        debug_assert!(
            i < self.size(),
            "rank {} out of range for expansion set of size {}",
            i,
            self.size()
        );
        ExpansionSetCursor::new(self.clone(), self.size().wrapping_sub(i))
    }

    /// Checked variant of [`at`](Self::at).
    pub fn get(&self, i: usize) -> Option<ExpansionSetCursor> {
        if i < self.size() {
            Some(ExpansionSetCursor::new(self.clone(), self.size() - i))
        } else {
            None
        }
    }

    /// Cursor at the last (lowest weighted) term.
    ///
    /// # Contract
    ///
    /// The set must not be empty. Only checked in debug builds.
    pub fn back(&self) -> ExpansionSetCursor {
        debug_assert!(!self.empty(), "back() called on an empty expansion set");
        ExpansionSetCursor::new(self.clone(), 1)
    }

    /// Iterate over the terms in rank order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.terms())
    }

    /// Iterate over cursors from `begin()` up to, but excluding, `end()`.
    pub fn cursors(&self) -> Cursors {
        Cursors::new(self.clone())
    }

    /// The canonical description, e.g.
    /// `ResultSet(size=2, bound=7, [cat:5, dog:3.2])`.
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExpansionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResultSet(size={}, bound={}, [", self.size(), self.bound())?;
        for (i, term) in self.terms().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{term}")?;
        }
        f.write_str("])")
    }
}

impl<'a> IntoIterator for &'a ExpansionSet {
    type Item = &'a ExpansionTerm;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serialized form of an [`ExpansionSet`].
#[derive(Serialize, Deserialize)]
struct SetRepr {
    bound: usize,
    terms: Vec<ExpansionTerm>,
}

impl From<ExpansionSet> for SetRepr {
    fn from(set: ExpansionSet) -> Self {
        SetRepr {
            bound: set.bound(),
            terms: set.terms().to_vec(),
        }
    }
}

impl TryFrom<SetRepr> for ExpansionSet {
    type Error = EsetError;

    fn try_from(repr: SetRepr) -> Result<Self, Self::Error> {
        ExpansionSetBuilder::with_capacity(repr.terms.len())
            .with_config(ExpansionConfig::default())
            .extend(repr.terms)
            .bound(repr.bound)
            .try_build()
    }
}
