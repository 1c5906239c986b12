//! Text analysis: turning raw document text into word tokens.
//!
//! Analysis is the first stage of both training and classification. The
//! pipeline here is deliberately small: a single tokenizer pass that extracts
//! word-like runs, lowercases them, and drops short tokens. Everything
//! downstream (counting, estimation, ranking) consumes the resulting
//! [`token::TokenStream`].

pub mod token;
pub mod tokenizer;

pub use token::{Token, TokenStream};
pub use tokenizer::{Tokenizer, WordTokenizer};
