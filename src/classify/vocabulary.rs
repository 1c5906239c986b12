//! Training-state accumulation for the Naive Bayes model.

use ahash::AHashMap;

use crate::analysis::token::Token;
use crate::classify::Category;

/// Per-category training counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryStats {
    /// Number of training documents recorded for this category.
    pub document_count: u64,
    /// Total number of tokens recorded for this category, counting repeats.
    pub word_count: u64,
}

/// Accumulated word-frequency state for one training run.
///
/// A `Vocabulary` is created empty, mutated only by [`record_training`]
/// (or [`merge`], which folds in another vocabulary's counts), and read-only
/// during classification and ranking. Counts grow monotonically; no entry is
/// ever removed and there is no reset operation — a vocabulary is single-use
/// for one training pass.
///
/// [`record_training`]: Vocabulary::record_training
/// [`merge`]: Vocabulary::merge
///
/// # Examples
///
/// ```
/// use bayesic::analysis::token::Token;
/// use bayesic::classify::{Category, Vocabulary};
///
/// let mut vocabulary = Vocabulary::new();
/// vocabulary.record_training(
///     Category::Positive,
///     vec![Token::new("offer", 0), Token::new("offer", 1)],
/// );
///
/// assert_eq!(vocabulary.occurrence_count(Category::Positive, "offer"), 2);
/// assert_eq!(vocabulary.unique_words(), 1);
/// assert_eq!(vocabulary.category_stats(Category::Positive).word_count, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// word -> occurrence count per category, indexed by category id.
    words: AHashMap<String, [u64; 2]>,
    /// Per-category document and token counters, indexed by category id.
    categories: [CategoryStats; 2],
    /// Count of all training documents across both categories.
    training_documents: u64,
}

impl Vocabulary {
    /// Create a new, empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one training document's tokens under the given category.
    ///
    /// Every token is counted, repeats included; the category's document
    /// count rises by one and its word count by the number of tokens.
    pub fn record_training(
        &mut self,
        category: Category,
        tokens: impl IntoIterator<Item = Token>,
    ) {
        let mut token_count = 0u64;
        for token in tokens {
            let counts = self.words.entry(token.text).or_insert([0, 0]);
            counts[category.index()] += 1;
            token_count += 1;
        }

        let stats = &mut self.categories[category.index()];
        stats.document_count += 1;
        stats.word_count += token_count;
        self.training_documents += 1;
    }

    /// How many times the word was observed in training documents of the
    /// given category. Zero for words never seen in that category.
    pub fn occurrence_count(&self, category: Category, word: &str) -> u64 {
        self.words
            .get(word)
            .map_or(0, |counts| counts[category.index()])
    }

    /// Number of distinct words observed across both categories.
    ///
    /// This is the smoothing vocabulary size `V`: every observed word gets a
    /// map entry on first sight, so the key set is exactly the unique-word
    /// set.
    pub fn unique_words(&self) -> usize {
        self.words.len()
    }

    /// Counters for the given category.
    pub fn category_stats(&self, category: Category) -> CategoryStats {
        self.categories[category.index()]
    }

    /// Count of all training documents across both categories.
    pub fn training_documents(&self) -> u64 {
        self.training_documents
    }

    /// Whether no training document has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.training_documents == 0
    }

    /// Iterate over every observed word and its per-category counts.
    pub fn iter_words(&self) -> impl Iterator<Item = (&str, [u64; 2])> {
        self.words.iter().map(|(word, counts)| (word.as_str(), *counts))
    }

    /// Fold another vocabulary's counts into this one.
    ///
    /// Used to reduce per-worker partial counts from parallel training into
    /// a single model; merging the partitions of a training set yields the
    /// same counts as training sequentially over the whole set.
    pub fn merge(&mut self, other: Vocabulary) {
        for (word, counts) in other.words {
            let entry = self.words.entry(word).or_insert([0, 0]);
            entry[0] += counts[0];
            entry[1] += counts[1];
        }
        for (index, stats) in other.categories.iter().enumerate() {
            self.categories[index].document_count += stats.document_count;
            self.categories[index].word_count += stats.word_count;
        }
        self.training_documents += other.training_documents;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words
            .iter()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect()
    }

    #[test]
    fn test_record_training_counts() {
        let mut vocabulary = Vocabulary::new();
        vocabulary.record_training(Category::Positive, tokens(&["offer", "prize", "offer"]));

        assert_eq!(vocabulary.occurrence_count(Category::Positive, "offer"), 2);
        assert_eq!(vocabulary.occurrence_count(Category::Positive, "prize"), 1);
        assert_eq!(vocabulary.occurrence_count(Category::Negative, "offer"), 0);
        assert_eq!(vocabulary.unique_words(), 2);
        assert_eq!(
            vocabulary.category_stats(Category::Positive),
            CategoryStats {
                document_count: 1,
                word_count: 3,
            }
        );
        assert_eq!(vocabulary.training_documents(), 1);
    }

    #[test]
    fn test_counts_accumulate_across_documents() {
        let mut vocabulary = Vocabulary::new();
        vocabulary.record_training(Category::Positive, tokens(&["offer"]));
        vocabulary.record_training(Category::Negative, tokens(&["offer", "meeting"]));
        vocabulary.record_training(Category::Positive, tokens(&["offer", "offer"]));

        assert_eq!(vocabulary.occurrence_count(Category::Positive, "offer"), 3);
        assert_eq!(vocabulary.occurrence_count(Category::Negative, "offer"), 1);
        assert_eq!(vocabulary.unique_words(), 2);
        assert_eq!(vocabulary.category_stats(Category::Positive).document_count, 2);
        assert_eq!(vocabulary.category_stats(Category::Negative).document_count, 1);
        assert_eq!(vocabulary.training_documents(), 3);
    }

    #[test]
    fn test_training_one_category_leaves_other_untouched() {
        let mut vocabulary = Vocabulary::new();
        vocabulary.record_training(Category::Negative, tokens(&["meeting", "agenda"]));
        let before = vocabulary.category_stats(Category::Positive);

        vocabulary.record_training(Category::Negative, tokens(&["meeting"]));
        assert_eq!(vocabulary.category_stats(Category::Positive), before);
    }

    #[test]
    fn test_empty_document_still_counts() {
        let mut vocabulary = Vocabulary::new();
        vocabulary.record_training(Category::Positive, tokens(&[]));

        assert_eq!(vocabulary.category_stats(Category::Positive).document_count, 1);
        assert_eq!(vocabulary.category_stats(Category::Positive).word_count, 0);
        assert_eq!(vocabulary.unique_words(), 0);
        assert!(!vocabulary.is_empty());
    }

    #[test]
    fn test_merge_equals_sequential_training() {
        let mut sequential = Vocabulary::new();
        sequential.record_training(Category::Positive, tokens(&["offer", "prize"]));
        sequential.record_training(Category::Negative, tokens(&["meeting", "offer"]));

        let mut left = Vocabulary::new();
        left.record_training(Category::Positive, tokens(&["offer", "prize"]));
        let mut right = Vocabulary::new();
        right.record_training(Category::Negative, tokens(&["meeting", "offer"]));
        left.merge(right);

        assert_eq!(left.training_documents(), sequential.training_documents());
        assert_eq!(left.unique_words(), sequential.unique_words());
        for category in Category::ALL {
            assert_eq!(
                left.category_stats(category),
                sequential.category_stats(category)
            );
            for word in ["offer", "prize", "meeting"] {
                assert_eq!(
                    left.occurrence_count(category, word),
                    sequential.occurrence_count(category, word)
                );
            }
        }
    }
}
