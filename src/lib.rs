//! # Bayesic
//!
//! A binary Naive Bayes text classifier for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Laplace-smoothed word-frequency likelihoods
//! - Log-space scoring to avoid numeric underflow
//! - Discriminative word ranking for model introspection
//! - Parallel batch training
//!
//! ## Example
//!
//! ```
//! use bayesic::prelude::*;
//!
//! let mut classifier = NaiveBayesClassifier::new();
//! classifier.train(Category::Positive, "limited offer claim your prize today")?;
//! classifier.train(Category::Negative, "meeting notes attached please review")?;
//!
//! let label = classifier.classify("claim your free prize")?;
//! assert_eq!(label, Category::Positive);
//! # Ok::<(), bayesic::error::BayesicError>(())
//! ```

pub mod analysis;
pub mod classify;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::token::{Token, TokenStream};
    pub use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
    pub use crate::classify::{
        Category, Estimator, NaiveBayesClassifier, RankedWord, Vocabulary, rank_words,
    };
    pub use crate::error::{BayesicError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
