//! The (term, weight) record stored in an expansion set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A candidate expansion term with its relevance weight.
///
/// Terms carry no identity of their own beyond their rank in the owning
/// [`ExpansionSet`](super::ExpansionSet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpansionTerm {
    /// The term text.
    pub text: String,
    /// The relevance weight assigned by the producer.
    pub weight: f64,
}

impl ExpansionTerm {
    /// Create a new expansion term.
    pub fn new<S: Into<String>>(text: S, weight: f64) -> Self {
        ExpansionTerm {
            text: text.into(),
            weight,
        }
    }

    /// The term text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The relevance weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl<S: Into<String>> From<(S, f64)> for ExpansionTerm {
    fn from((text, weight): (S, f64)) -> Self {
        ExpansionTerm::new(text, weight)
    }
}

/// Renders as `<term>:<weight>`, the form used inside set descriptions.
impl fmt::Display for ExpansionTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.text, self.weight)
    }
}
