//! Token types for text analysis.

use serde::{Deserialize, Serialize};

/// A token represents a single normalized word extracted from input text.
///
/// # Examples
///
/// ```
/// use bayesic::analysis::token::Token;
///
/// let token = Token::new("hello", 0);
/// assert_eq!(token.text, "hello");
/// assert_eq!(token.position, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new(text: &str, position: usize) -> Self {
        Token {
            text: text.to_string(),
            position,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.text, self.position)
    }
}

/// A stream of tokens produced by a tokenizer.
///
/// Token streams are finite, consumed once, and yield tokens in source order.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("offer", 2);
        assert_eq!(token.text, "offer");
        assert_eq!(token.position, 2);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("prize", 0);
        assert_eq!(token.to_string(), "prize@0");
    }
}
