//! The binary Naive Bayes classifier.

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::classify::ranking::{RankedWord, rank_words};
use crate::classify::{Category, Estimator, Vocabulary};
use crate::error::{BayesicError, Result};

/// Fixed prior contribution added to every category score.
///
/// The reference model scores both categories with this constant instead of
/// a log prior derived from relative document counts. It never varies with
/// training balance, so it cancels in the decision rule; replacing it with a
/// proportional prior would change decisions on unbalanced corpora and break
/// parity with previously reported scores, so it stays fixed.
pub const PRIOR_WEIGHT: f64 = 0.5;

/// Binary Naive Bayes text classifier.
///
/// Owns the tokenizer and the accumulated training state. Training is
/// sequential per call; [`train_batch`] offers a parallel path that reduces
/// per-worker partial counts into the model before returning. Classification
/// and ranking never mutate the model.
///
/// [`train_batch`]: NaiveBayesClassifier::train_batch
///
/// # Examples
///
/// ```
/// use bayesic::classify::{Category, NaiveBayesClassifier};
///
/// let mut classifier = NaiveBayesClassifier::new();
/// classifier.train(Category::Positive, "special offer special offer")?;
/// classifier.train(Category::Negative, "meeting notes meeting agenda")?;
///
/// assert_eq!(classifier.classify("special special offer")?, Category::Positive);
/// # Ok::<(), bayesic::error::BayesicError>(())
/// ```
pub struct NaiveBayesClassifier {
    /// Tokenizer applied to every training and classification input.
    tokenizer: Arc<dyn Tokenizer>,
    /// Accumulated training state.
    vocabulary: Vocabulary,
}

impl std::fmt::Debug for NaiveBayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("tokenizer", &self.tokenizer.name())
            .field("unique_words", &self.vocabulary.unique_words())
            .field("training_documents", &self.vocabulary.training_documents())
            .finish()
    }
}

impl Default for NaiveBayesClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NaiveBayesClassifier {
    /// Create a classifier with the default [`WordTokenizer`].
    pub fn new() -> Self {
        Self::with_tokenizer(Arc::new(WordTokenizer::default()))
    }

    /// Create a classifier with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        NaiveBayesClassifier {
            tokenizer,
            vocabulary: Vocabulary::new(),
        }
    }

    /// Train on a single document of the given category.
    pub fn train(&mut self, category: Category, text: &str) -> Result<()> {
        let tokens = self.tokenizer.tokenize(text)?;
        self.vocabulary.record_training(category, tokens);
        Ok(())
    }

    /// Train on many labelled documents, tokenizing and counting in parallel.
    ///
    /// Workers accumulate into private partial vocabularies which are reduced
    /// and merged into the model before this returns, so no partially merged
    /// counts are ever observable.
    pub fn train_batch(&mut self, documents: &[(Category, String)]) -> Result<()> {
        let tokenizer = Arc::clone(&self.tokenizer);
        let partial = documents
            .par_iter()
            .try_fold(Vocabulary::new, |mut vocabulary, (category, text)| {
                let tokens = tokenizer.tokenize(text)?;
                vocabulary.record_training(*category, tokens);
                Ok::<_, BayesicError>(vocabulary)
            })
            .try_reduce(Vocabulary::new, |mut left, right| {
                left.merge(right);
                Ok(left)
            })?;

        self.vocabulary.merge(partial);
        debug!(
            "batch trained {} documents ({} unique words)",
            documents.len(),
            self.vocabulary.unique_words()
        );
        Ok(())
    }

    /// Classify a document, returning the winning category.
    ///
    /// Each category's score is the fixed prior contribution plus the
    /// document log-likelihood under that category. The positive category
    /// wins only on a strictly greater score; ties resolve to the negative
    /// category. Any input is accepted, including empty text and text
    /// against an untrained model.
    pub fn classify(&self, text: &str) -> Result<Category> {
        let tokens: Vec<Token> = self.tokenizer.tokenize(text)?.collect();
        let estimator = Estimator::new(&self.vocabulary);

        let negative =
            PRIOR_WEIGHT + estimator.document_log_likelihood(Category::Negative, &tokens);
        let positive =
            PRIOR_WEIGHT + estimator.document_log_likelihood(Category::Positive, &tokens);
        debug!("scores: negative={negative:.4} positive={positive:.4}");

        if positive > negative {
            Ok(Category::Positive)
        } else {
            Ok(Category::Negative)
        }
    }

    /// Rank every observed word by discriminative strength.
    ///
    /// See [`rank_words`] for the metric and ordering guarantees.
    pub fn rank_words(&self) -> Vec<RankedWord> {
        rank_words(&self.vocabulary)
    }

    /// The accumulated training state.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}
