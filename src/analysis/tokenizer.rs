//! Tokenizer implementations for text analysis.
//!
//! The [`Tokenizer`] trait is the seam between raw text and the classifier:
//! anything that can produce a [`TokenStream`] can feed the model. The
//! default implementation is [`WordTokenizer`], which extracts word-like
//! runs, lowercases them, and drops tokens too short to carry signal.

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{BayesicError, Result};

/// Tokens of this many characters or fewer are discarded by [`WordTokenizer`].
pub const MIN_TOKEN_CHARS: usize = 3;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so tokenizers can be shared across
/// training workers.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// The stream is finite and reflects source order; duplicate words are
    /// preserved. Empty or token-less text yields an empty stream.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// The default word tokenizer.
///
/// Extracts maximal runs of word characters (letters, digits, underscore)
/// and apostrophes, lowercases each run, and drops any token whose length
/// is [`MIN_TOKEN_CHARS`] characters or fewer.
///
/// # Examples
///
/// ```
/// use bayesic::analysis::tokenizer::{Tokenizer, WordTokenizer};
///
/// let tokenizer = WordTokenizer::new().unwrap();
/// let tokens: Vec<_> = tokenizer
///     .tokenize("The Quick fox jumped")
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["quick", "jumped"]);
/// ```
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The regex pattern used to extract candidate tokens
    pattern: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new word tokenizer.
    ///
    /// The pattern `[\w']+` matches sequences of word characters and
    /// apostrophes, so contractions like "don't" survive as single tokens.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"[\w']+")
            .map_err(|e| BayesicError::analysis(format!("Invalid token pattern: {e}")))?;

        Ok(WordTokenizer {
            pattern: Arc::new(regex),
        })
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Default token pattern should be valid")
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .map(|mat| mat.as_str().to_lowercase())
            .filter(|word| word.chars().count() > MIN_TOKEN_CHARS)
            .enumerate()
            .map(|(position, word)| Token {
                text: word,
                position,
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        let tokenizer = WordTokenizer::new().unwrap();
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_lowercase_and_length_filter() {
        assert_eq!(texts("The Quick fox jumped"), vec!["quick", "jumped"]);
    }

    #[test]
    fn test_source_order_and_duplicates() {
        assert_eq!(
            texts("offer SPECIAL offer"),
            vec!["offer", "special", "offer"]
        );
    }

    #[test]
    fn test_positions_are_sequential() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer
            .tokenize("alpha beta gamma")
            .unwrap()
            .collect();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        assert_eq!(
            texts("claim,your.prize!now"),
            vec!["claim", "your", "prize"]
        );
    }

    #[test]
    fn test_apostrophes_kept_inside_tokens() {
        assert_eq!(texts("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn test_empty_and_tokenless_input() {
        assert!(texts("").is_empty());
        assert!(texts("a an to of?!").is_empty());
    }

    #[test]
    fn test_digits_and_underscores_are_word_characters() {
        assert_eq!(texts("user_name v1234 ab12"), vec!["user_name", "v1234", "ab12"]);
    }

    #[test]
    fn test_tokenizer_name() {
        let tokenizer = WordTokenizer::new().unwrap();
        assert_eq!(tokenizer.name(), "word");
    }
}
