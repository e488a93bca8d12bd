//! Filters deciding which candidate terms are eligible for a set.

use std::collections::HashSet;

/// Decides whether a candidate term may enter an expansion set.
///
/// Any `Fn(&str) -> bool` closure is a decider.
pub trait ExpandDecider: Send + Sync {
    /// Return `true` to accept `term`.
    fn accept(&self, term: &str) -> bool;
}

impl<F> ExpandDecider for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn accept(&self, term: &str) -> bool {
        self(term)
    }
}

/// Accepts only terms starting with a prefix.
#[derive(Debug, Clone)]
pub struct PrefixDecider {
    prefix: String,
}

impl PrefixDecider {
    /// Create a decider accepting terms that start with `prefix`.
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl ExpandDecider for PrefixDecider {
    fn accept(&self, term: &str) -> bool {
        term.starts_with(&self.prefix)
    }
}

/// Rejects a fixed list of terms, typically those already in the query.
#[derive(Debug, Clone, Default)]
pub struct TermsDecider {
    rejected: HashSet<String>,
}

impl TermsDecider {
    /// Create a decider rejecting every term in `terms`.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rejected: terms.into_iter().map(Into::into).collect(),
        }
    }
}

impl ExpandDecider for TermsDecider {
    fn accept(&self, term: &str) -> bool {
        !self.rejected.contains(term)
    }
}

/// Accepts a term only if both inner deciders do.
pub struct AndDecider {
    first: Box<dyn ExpandDecider>,
    second: Box<dyn ExpandDecider>,
}

impl AndDecider {
    /// Combine two deciders; `second` is only consulted if `first` accepts.
    pub fn new(first: impl ExpandDecider + 'static, second: impl ExpandDecider + 'static) -> Self {
        Self {
            first: Box::new(first),
            second: Box::new(second),
        }
    }
}

impl ExpandDecider for AndDecider {
    fn accept(&self, term: &str) -> bool {
        self.first.accept(term) && self.second.accept(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix() {
        let decider = PrefixDecider::new("Z");
        assert!(decider.accept("Zcat"));
        assert!(!decider.accept("cat"));
    }

    #[test]
    fn test_terms() {
        let decider = TermsDecider::new(["cat", "dog"]);
        assert!(!decider.accept("cat"));
        assert!(decider.accept("fish"));
    }

    #[test]
    fn test_closure_and_combination() {
        let decider = AndDecider::new(PrefixDecider::new("f"), |term: &str| term.len() > 3);
        assert!(decider.accept("fish"));
        assert!(!decider.accept("fig"));
        assert!(!decider.accept("bird"));
    }
}
