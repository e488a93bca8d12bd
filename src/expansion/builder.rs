//! Builder used by expansion producers to hand over their ranked terms.

use log::{debug, warn};

use crate::error::{EsetError, Result};

use super::config::ExpansionConfig;
use super::decider::ExpandDecider;
use super::set::ExpansionSet;
use super::term::ExpansionTerm;

/// Builder for [`ExpansionSet`] instances.
///
/// The producer pushes candidates already ordered by non-increasing weight.
/// On build, candidates rejected by the decider are dropped, then terms below
/// `min_weight`, then everything past `max_terms`. The order is never changed,
/// so weight ties stay in the order they were pushed.
///
/// Unless set explicitly, the bound is the number of candidates the decider
/// accepted.
///
/// # Example
///
/// ```
/// use eset::expansion::{ExpansionConfig, ExpansionSetBuilder, TermsDecider};
///
/// # fn main() -> eset::error::Result<()> {
/// let set = ExpansionSetBuilder::new()
///     .with_config(ExpansionConfig::default().with_max_terms(2))
///     .decider(TermsDecider::new(["cat"]))
///     .push("cat", 6.0)
///     .push("dog", 3.2)
///     .push("fish", 1.1)
///     .push("bird", 0.5)
///     .try_build()?;
///
/// assert_eq!(set.size(), 2);
/// assert_eq!(set.bound(), 3);
/// assert_eq!(set.begin().term(), "dog");
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ExpansionSetBuilder {
    candidates: Vec<ExpansionTerm>,
    bound: Option<usize>,
    config: ExpansionConfig,
    decider: Option<Box<dyn ExpandDecider>>,
}

/// Outcome of applying the decider and limits to the candidates.
struct Selection {
    terms: Vec<ExpansionTerm>,
    bound: usize,
    candidates: usize,
    rejected: usize,
    below_min_weight: usize,
}

impl ExpansionSetBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `capacity` candidates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            candidates: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Replace the selection limits.
    pub fn with_config(mut self, config: ExpansionConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a candidate term.
    pub fn push<S: Into<String>>(mut self, term: S, weight: f64) -> Self {
        self.candidates.push(ExpansionTerm::new(term, weight));
        self
    }

    /// Add candidate terms in order.
    pub fn extend<I, T>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ExpansionTerm>,
    {
        self.candidates.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Set the number of terms that were eligible for selection.
    pub fn bound(mut self, bound: usize) -> Self {
        self.bound = Some(bound);
        self
    }

    /// Filter candidates through `decider`.
    pub fn decider(mut self, decider: impl ExpandDecider + 'static) -> Self {
        self.decider = Some(Box::new(decider));
        self
    }

    /// Build the set without checking the producer contract.
    ///
    /// Unsorted weights or a bound smaller than the resulting size are
    /// producer bugs; debug builds assert on them, release builds store the
    /// data as given.
    pub fn build(self) -> ExpansionSet {
        let selection = self.select();
        debug_assert!(
            is_non_increasing(&selection.terms),
            "expansion terms must be ordered by non-increasing weight"
        );
        debug_assert!(
            selection.bound >= selection.terms.len(),
            "bound {} is smaller than the set size {}",
            selection.bound,
            selection.terms.len()
        );
        selection.finish()
    }

    /// Build the set, rejecting input that breaks the producer contract.
    ///
    /// Fails if the configuration is invalid, a weight is not finite, the
    /// candidates are not ordered by non-increasing weight, or an explicit
    /// bound is smaller than the resulting size.
    pub fn try_build(self) -> Result<ExpansionSet> {
        self.config.validate()?;

        if let Some(term) = self.candidates.iter().find(|t| !t.weight.is_finite()) {
            warn!("rejecting expansion term {:?} with weight {}", term.text, term.weight);
            return Err(EsetError::producer_contract(format!(
                "weight of term {:?} is not finite: {}",
                term.text, term.weight
            )));
        }

        if let Some(rank) = first_increase(&self.candidates) {
            let (prev, next) = (&self.candidates[rank - 1], &self.candidates[rank]);
            warn!(
                "rejecting unsorted expansion terms at rank {}: {} < {}",
                rank, prev.weight, next.weight
            );
            return Err(EsetError::producer_contract(format!(
                "terms not in non-increasing weight order at rank {}: {} after {}",
                rank, next, prev
            )));
        }

        let selection = self.select();
        if selection.bound < selection.terms.len() {
            warn!(
                "rejecting expansion set with bound {} below size {}",
                selection.bound,
                selection.terms.len()
            );
            return Err(EsetError::producer_contract(format!(
                "bound {} is smaller than the set size {}",
                selection.bound,
                selection.terms.len()
            )));
        }

        Ok(selection.finish())
    }

    fn select(self) -> Selection {
        let ExpansionSetBuilder {
            candidates,
            bound,
            config,
            decider,
        } = self;

        let candidate_count = candidates.len();
        let mut terms = Vec::with_capacity(candidate_count.min(config.max_terms));
        let mut eligible = 0;
        let mut below_min_weight = 0;

        for term in candidates {
            if decider.as_ref().is_some_and(|d| !d.accept(&term.text)) {
                continue;
            }
            eligible += 1;

            if config.min_weight.is_some_and(|min| term.weight < min) {
                below_min_weight += 1;
                continue;
            }
            if terms.len() < config.max_terms {
                terms.push(term);
            }
        }

        Selection {
            terms,
            bound: bound.unwrap_or(eligible),
            candidates: candidate_count,
            rejected: candidate_count - eligible,
            below_min_weight,
        }
    }
}

impl Selection {
    fn finish(self) -> ExpansionSet {
        debug!(
            "built expansion set: {} candidates, {} rejected by decider, {} below min weight, {} kept, bound {}",
            self.candidates,
            self.rejected,
            self.below_min_weight,
            self.terms.len(),
            self.bound
        );
        ExpansionSet::from_parts(self.terms, self.bound)
    }
}

/// Rank of the first term weighted higher than its predecessor.
fn first_increase(terms: &[ExpansionTerm]) -> Option<usize> {
    terms
        .windows(2)
        .position(|pair| pair[0].weight < pair[1].weight)
        .map(|i| i + 1)
}

fn is_non_increasing(terms: &[ExpansionTerm]) -> bool {
    first_increase(terms).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expansion::decider::PrefixDecider;

    #[test]
    fn test_build_keeps_producer_order() {
        let set = ExpansionSetBuilder::new()
            .push("b", 2.0)
            .push("a", 2.0)
            .push("c", 1.0)
            .bound(5)
            .build();
        let order: Vec<&str> = set.iter().map(|t| t.text()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
        assert_eq!(set.bound(), 5);
    }

    #[test]
    fn test_implicit_bound_counts_eligible_candidates() {
        let set = ExpansionSetBuilder::new()
            .with_config(ExpansionConfig::default().with_max_terms(1))
            .decider(PrefixDecider::new("x"))
            .extend([("xa", 3.0), ("b", 2.5), ("xc", 2.0), ("xd", 1.0)])
            .build();
        assert_eq!(set.size(), 1);
        assert_eq!(set.bound(), 3);
        assert_eq!(set.begin().term(), "xa");
    }

    #[test]
    fn test_min_weight_drops_tail() {
        let set = ExpansionSetBuilder::new()
            .with_config(ExpansionConfig::default().with_min_weight(1.5))
            .extend([("cat", 5.0), ("dog", 3.2), ("fish", 1.1)])
            .build();
        assert_eq!(set.size(), 2);
        assert_eq!(set.bound(), 3);
        assert_eq!(set.back().term(), "dog");
    }

    #[test]
    fn test_default_config_keeps_negative_weights() {
        let set = ExpansionSetBuilder::new()
            .extend([("a", 0.5), ("b", -0.25), ("c", -1.0)])
            .bound(3)
            .try_build()
            .unwrap();
        assert_eq!(set.size(), 3);
        assert_eq!(set.back().weight(), -1.0);
        assert_eq!(set.description(), "ResultSet(size=3, bound=3, [a:0.5, b:-0.25, c:-1])");
    }

    #[test]
    fn test_zero_max_terms_is_empty() {
        let set = ExpansionSetBuilder::new()
            .with_config(ExpansionConfig::default().with_max_terms(0))
            .push("cat", 1.0)
            .build();
        assert!(set.empty());
        assert_eq!(set.bound(), 1);
        assert_eq!(set.begin(), set.end());
    }

    #[test]
    fn test_try_build_rejects_unsorted() {
        let err = ExpansionSetBuilder::new()
            .extend([("a", 1.0), ("b", 2.0)])
            .try_build()
            .unwrap_err();
        assert!(matches!(err, EsetError::ProducerContract(_)));
        assert!(err.to_string().contains("rank 1"));
    }

    #[test]
    fn test_try_build_rejects_small_bound() {
        let err = ExpansionSetBuilder::new()
            .extend([("a", 2.0), ("b", 1.0)])
            .bound(1)
            .try_build()
            .unwrap_err();
        assert!(matches!(err, EsetError::ProducerContract(_)));
    }

    #[test]
    fn test_try_build_rejects_nan() {
        let err = ExpansionSetBuilder::new()
            .push("a", f64::NAN)
            .try_build()
            .unwrap_err();
        assert!(matches!(err, EsetError::ProducerContract(_)));
    }

    #[test]
    fn test_try_build_rejects_invalid_config() {
        let err = ExpansionSetBuilder::new()
            .with_config(ExpansionConfig::default().with_min_weight(f64::NAN))
            .push("a", 1.0)
            .try_build()
            .unwrap_err();
        assert!(matches!(err, EsetError::InvalidConfig(_)));
    }

    #[test]
    fn test_first_increase() {
        let terms: Vec<ExpansionTerm> = [("a", 3.0), ("b", 3.0), ("c", 4.0)]
            .into_iter()
            .map(Into::into)
            .collect();
        assert_eq!(first_increase(&terms), Some(2));
        assert_eq!(first_increase(&terms[..2]), None);
        assert_eq!(first_increase(&[]), None);
    }
}
