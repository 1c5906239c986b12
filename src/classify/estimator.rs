//! Smoothed probability estimation and log-likelihood scoring.

use crate::analysis::token::Token;
use crate::classify::{Category, Vocabulary};

/// Laplace smoothing pseudocount applied to every word/category pair.
///
/// Guarantees every word, including words never seen during training, has a
/// strictly positive probability under both categories, so the log-likelihood
/// sum never collapses to negative infinity.
pub const SMOOTHING_PSEUDOCOUNT: f64 = 1.0;

/// Fixed additive bias seeding every document log-likelihood.
///
/// The reference model starts its likelihood accumulator at 1 rather than 0.
/// The offset is identical for both categories and cancels in the decision
/// rule, but reported scores only reproduce earlier runs if it is kept.
pub const LOG_LIKELIHOOD_BIAS: f64 = 1.0;

/// Read-only probability estimator over a trained [`Vocabulary`].
///
/// # Examples
///
/// ```
/// use bayesic::analysis::token::Token;
/// use bayesic::classify::{Category, Estimator, Vocabulary};
///
/// let mut vocabulary = Vocabulary::new();
/// vocabulary.record_training(
///     Category::Positive,
///     vec![Token::new("offer", 0), Token::new("prize", 1)],
/// );
///
/// let estimator = Estimator::new(&vocabulary);
/// // (1 + 1) / (2 + 1 * 2)
/// assert_eq!(
///     estimator.word_given_category(Category::Positive, "offer"),
///     0.5
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Estimator<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> Estimator<'a> {
    /// Create an estimator over the given vocabulary.
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Estimator { vocabulary }
    }

    /// Laplace-smoothed conditional probability of `word` given `category`.
    ///
    /// With pseudocount `z`, vocabulary size `V`, and the category's total
    /// word count `N`, returns `(z + count) / (N + z * V)`. Always in
    /// `(0, 1]`, including for words never observed in either category.
    pub fn word_given_category(&self, category: Category, word: &str) -> f64 {
        let z = SMOOTHING_PSEUDOCOUNT;
        let stats = self.vocabulary.category_stats(category);
        let denominator = stats.word_count as f64 + z * self.vocabulary.unique_words() as f64;
        if denominator == 0.0 {
            // Untrained model: nothing observed, so every word sits at the
            // probability ceiling instead of dividing by zero.
            return 1.0;
        }

        let numerator = z + self.vocabulary.occurrence_count(category, word) as f64;
        numerator / denominator
    }

    /// Biased sum of per-token log-probabilities under the given category.
    ///
    /// Computes `LOG_LIKELIHOOD_BIAS + Σ ln(P(token | category))` over the
    /// tokens in order. An empty token slice yields the bias alone.
    pub fn document_log_likelihood(&self, category: Category, tokens: &[Token]) -> f64 {
        let mut likelihood = LOG_LIKELIHOOD_BIAS;
        for token in tokens {
            likelihood += self.word_given_category(category, &token.text).ln();
        }
        likelihood
    }
}
