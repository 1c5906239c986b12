//! Binary Naive Bayes classification.
//!
//! This module is the core of the crate: training-state accumulation
//! ([`vocabulary::Vocabulary`]), smoothed probability estimation
//! ([`estimator::Estimator`]), the decision rule
//! ([`naive_bayes::NaiveBayesClassifier`]), and discriminative word ranking
//! ([`ranking::rank_words`]).

pub mod estimator;
pub mod naive_bayes;
pub mod ranking;
pub mod vocabulary;

pub use estimator::{Estimator, LOG_LIKELIHOOD_BIAS, SMOOTHING_PSEUDOCOUNT};
pub use naive_bayes::{NaiveBayesClassifier, PRIOR_WEIGHT};
pub use ranking::{RankedWord, rank_words};
pub use vocabulary::{CategoryStats, Vocabulary};

use serde::{Deserialize, Serialize};

use crate::error::{BayesicError, Result};

/// One of the two classes a document may belong to.
///
/// Categories carry the conventional numeric identifiers of the model:
/// [`Category::Negative`] is 0 (e.g. wanted mail) and [`Category::Positive`]
/// is 1 (e.g. unwanted mail).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// The negative class, identifier 0.
    Negative,
    /// The positive class, identifier 1.
    Positive,
}

impl Category {
    /// Both categories, in identifier order.
    pub const ALL: [Category; 2] = [Category::Negative, Category::Positive];

    /// The numeric identifier of this category (0 or 1).
    pub fn id(&self) -> u8 {
        match self {
            Category::Negative => 0,
            Category::Positive => 1,
        }
    }

    /// Resolve a numeric identifier to a category.
    pub fn from_id(id: u8) -> Result<Category> {
        match id {
            0 => Ok(Category::Negative),
            1 => Ok(Category::Positive),
            other => Err(BayesicError::invalid_argument(format!(
                "category id must be 0 or 1, got {other}"
            ))),
        }
    }

    /// Index of this category into per-category count arrays.
    pub(crate) fn index(&self) -> usize {
        self.id() as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
