//! Iterator adapters over an [`ExpansionSet`].

use std::iter::FusedIterator;
use std::slice;

use super::cursor::ExpansionSetCursor;
use super::set::ExpansionSet;
use super::term::ExpansionTerm;

/// Borrowing iterator over the terms of a set, in rank order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, ExpansionTerm>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(terms: &'a [ExpansionTerm]) -> Self {
        Iter {
            inner: terms.iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ExpansionTerm;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n)
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Owning iterator yielding a cursor for every term, from `begin()` towards
/// `end()`.
///
/// Holds its own share of the set.
#[derive(Debug, Clone)]
pub struct Cursors {
    set: ExpansionSet,
    // Offsets from the end: `front` is the next cursor to yield from the
    // front, `back` the last one already yielded from the back.
    front: usize,
    back: usize,
}

impl Cursors {
    pub(crate) fn new(set: ExpansionSet) -> Self {
        let front = set.size();
        Cursors {
            set,
            front,
            back: 0,
        }
    }
}

impl Iterator for Cursors {
    type Item = ExpansionSetCursor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let cursor = ExpansionSetCursor::new(self.set.clone(), self.front);
        self.front -= 1;
        Some(cursor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front - self.back;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Cursors {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back += 1;
        Some(ExpansionSetCursor::new(self.set.clone(), self.back))
    }
}

impl ExactSizeIterator for Cursors {}

impl FusedIterator for Cursors {}
