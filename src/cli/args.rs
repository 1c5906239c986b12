//! Command line argument parsing for the bayesic CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Bayesic - a binary Naive Bayes text classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "bayesic")]
#[command(about = "A binary Naive Bayes text classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct BayesicArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BayesicArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train from labelled corpora, classify unknown documents, write reports
    Classify(ClassifyArgs),

    /// Train and re-classify the training corpora to measure self-consistency
    #[command(name = "cross-check")]
    CrossCheck(CrossCheckArgs),

    /// Train and rank words by discriminative strength
    #[command(name = "top-words")]
    TopWords(TopWordsArgs),
}

/// Arguments for training and classifying
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Directory of positive-class training documents (category 1)
    #[arg(long, value_name = "DIR")]
    pub positive_dir: PathBuf,

    /// Directory of negative-class training documents (category 0)
    #[arg(long, value_name = "DIR")]
    pub negative_dir: PathBuf,

    /// Directory of documents to classify
    #[arg(long, value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Path of the per-document prediction report
    #[arg(long, value_name = "FILE", default_value = "results.csv")]
    pub results_out: PathBuf,

    /// Path of the top-ranked word report
    #[arg(long, value_name = "FILE", default_value = "top_features.csv")]
    pub features_out: PathBuf,

    /// How many top-ranked words to report
    #[arg(long, default_value_t = 31)]
    pub top: usize,

    /// Train in parallel across documents
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for cross-checking the model against its own training data
#[derive(Parser, Debug, Clone)]
pub struct CrossCheckArgs {
    /// Directory of positive-class training documents (category 1)
    #[arg(long, value_name = "DIR")]
    pub positive_dir: PathBuf,

    /// Directory of negative-class training documents (category 0)
    #[arg(long, value_name = "DIR")]
    pub negative_dir: PathBuf,

    /// Train in parallel across documents
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for ranking words
#[derive(Parser, Debug, Clone)]
pub struct TopWordsArgs {
    /// Directory of positive-class training documents (category 1)
    #[arg(long, value_name = "DIR")]
    pub positive_dir: PathBuf,

    /// Directory of negative-class training documents (category 0)
    #[arg(long, value_name = "DIR")]
    pub negative_dir: PathBuf,

    /// How many top-ranked words to show (0 = all)
    #[arg(long, default_value_t = 31)]
    pub top: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let mut args = BayesicArgs::parse_from([
            "bayesic",
            "top-words",
            "--positive-dir",
            "spam",
            "--negative-dir",
            "ham",
        ]);
        assert_eq!(args.verbosity(), 1);

        args.verbose = 2;
        assert_eq!(args.verbosity(), 2);

        args.quiet = true;
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_classify_defaults() {
        let args = BayesicArgs::parse_from([
            "bayesic",
            "classify",
            "--positive-dir",
            "spam",
            "--negative-dir",
            "ham",
            "--input-dir",
            "unknown",
        ]);
        match args.command {
            Command::Classify(classify) => {
                assert_eq!(classify.results_out, PathBuf::from("results.csv"));
                assert_eq!(classify.features_out, PathBuf::from("top_features.csv"));
                assert_eq!(classify.top, 31);
                assert!(!classify.parallel);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
