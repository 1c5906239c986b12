//! Discriminative word ranking across the two categories.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::classify::naive_bayes::PRIOR_WEIGHT;
use crate::classify::{Category, Estimator, Vocabulary};

/// A word together with its discriminative-strength metric.
///
/// The metric is a symmetric ratio of the two categories' scaled
/// log-probabilities, not a probability itself; larger values indicate a
/// stronger association with one category or the other.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedWord {
    /// The observed word.
    pub word: String,
    /// Discriminative-strength metric, always >= 1 for valid entries.
    pub metric: f64,
}

/// Rank every observed word by how lopsided its category association is.
///
/// For each word the scaled log-probabilities
/// `ln(P(word | category) * PRIOR_WEIGHT)` of the two categories are compared
/// and the metric is `max(p1/p2, p2/p1)`, so direction does not matter. The
/// output is sorted descending by metric; words with equal metrics are
/// ordered lexically so the ranking is stable across runs. Ranking reads the
/// model without mutating it: two calls on an unmodified vocabulary yield
/// identical output.
///
/// A log term of exactly zero would make the ratio undefined; such words are
/// skipped. With the fixed prior factor of 0.5 every term is strictly
/// negative, so the guard only matters if the scaling ever changes.
///
/// An untrained vocabulary has no observed words and yields an empty ranking.
pub fn rank_words(vocabulary: &Vocabulary) -> Vec<RankedWord> {
    let estimator = Estimator::new(vocabulary);

    let mut ranked: Vec<RankedWord> = vocabulary
        .iter_words()
        .filter_map(|(word, _)| {
            let p_positive =
                (estimator.word_given_category(Category::Positive, word) * PRIOR_WEIGHT).ln();
            let p_negative =
                (estimator.word_given_category(Category::Negative, word) * PRIOR_WEIGHT).ln();
            if p_positive == 0.0 || p_negative == 0.0 {
                return None;
            }

            let metric = (p_positive / p_negative).max(p_negative / p_positive);
            Some(RankedWord {
                word: word.to_string(),
                metric,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.metric
            .partial_cmp(&a.metric)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.word.cmp(&b.word))
    });

    ranked
}
