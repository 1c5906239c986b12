//! Command implementations for the bayesic CLI.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::classify::{Category, NaiveBayesClassifier};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: BayesicArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => run_classify(classify_args.clone(), &args),
        Command::CrossCheck(check_args) => run_cross_check(check_args.clone(), &args),
        Command::TopWords(top_args) => run_top_words(top_args.clone(), &args),
    }
}

/// Load every regular file in a directory as `(file name, text)` pairs.
///
/// Files are visited in sorted name order so reports are deterministic.
/// Bytes are decoded lossily as UTF-8; the contents are treated as
/// already-extracted plain text.
pub fn load_directory(dir: &Path) -> Result<Vec<(String, String)>> {
    let mut documents = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let bytes = fs::read(entry.path())?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        documents.push((entry.file_name().to_string_lossy().into_owned(), text));
    }
    documents.sort_by(|a, b| a.0.cmp(&b.0));
    debug!("loaded {} documents from {}", documents.len(), dir.display());
    Ok(documents)
}

/// Train a classifier from the positive and negative corpus directories.
pub fn train_from_dirs(
    positive_dir: &Path,
    negative_dir: &Path,
    parallel: bool,
) -> Result<NaiveBayesClassifier> {
    let mut classifier = NaiveBayesClassifier::new();

    if parallel {
        let mut documents: Vec<(Category, String)> = Vec::new();
        for (_, text) in load_directory(positive_dir)? {
            documents.push((Category::Positive, text));
        }
        for (_, text) in load_directory(negative_dir)? {
            documents.push((Category::Negative, text));
        }
        classifier.train_batch(&documents)?;
    } else {
        for (_, text) in load_directory(positive_dir)? {
            classifier.train(Category::Positive, &text)?;
        }
        for (_, text) in load_directory(negative_dir)? {
            classifier.train(Category::Negative, &text)?;
        }
    }

    info!(
        "trained on {} documents ({} unique words)",
        classifier.vocabulary().training_documents(),
        classifier.vocabulary().unique_words()
    );
    Ok(classifier)
}

/// Classify every document in a directory.
pub fn classify_directory(
    classifier: &NaiveBayesClassifier,
    input_dir: &Path,
) -> Result<Vec<ClassificationRecord>> {
    let mut records = Vec::new();
    for (id, text) in load_directory(input_dir)? {
        let prediction = classifier.classify(&text)?;
        records.push(ClassificationRecord {
            id,
            prediction: prediction.id(),
        });
    }
    Ok(records)
}

/// Take the top `limit` ranked words as report records (0 takes all).
pub fn top_features(classifier: &NaiveBayesClassifier, limit: usize) -> Vec<RankedFeatureRecord> {
    let mut ranked = classifier.rank_words();
    if limit > 0 {
        ranked.truncate(limit);
    }
    ranked
        .into_iter()
        .map(|entry| RankedFeatureRecord {
            feature: entry.word,
            weight: entry.metric,
        })
        .collect()
}

/// Train, classify the input directory, and write both CSV reports.
fn run_classify(args: ClassifyArgs, cli_args: &BayesicArgs) -> Result<()> {
    let classifier = train_from_dirs(&args.positive_dir, &args.negative_dir, args.parallel)?;

    let records = classify_directory(&classifier, &args.input_dir)?;
    write_classification_csv(&args.results_out, &records)?;

    let features = top_features(&classifier, args.top);
    write_features_csv(&args.features_out, &features)?;

    let summary = ClassificationSummary {
        documents_classified: records.len(),
        positive_predictions: records.iter().filter(|r| r.prediction == 1).count(),
        negative_predictions: records.iter().filter(|r| r.prediction == 0).count(),
        top_features_reported: features.len(),
    };
    if cli_args.verbosity() > 0 {
        print_result(&summary, cli_args)?;
    }
    Ok(())
}

/// Re-classify the training corpora and report misclassified files.
fn run_cross_check(args: CrossCheckArgs, cli_args: &BayesicArgs) -> Result<()> {
    let classifier = train_from_dirs(&args.positive_dir, &args.negative_dir, args.parallel)?;
    let summary = cross_check(&classifier, &args.positive_dir, &args.negative_dir)?;

    if cli_args.verbosity() > 0 {
        print_result(&summary, cli_args)?;
    }
    Ok(())
}

/// Classify each training document again and collect the mismatches.
pub fn cross_check(
    classifier: &NaiveBayesClassifier,
    positive_dir: &Path,
    negative_dir: &Path,
) -> Result<CrossCheckSummary> {
    let positive = load_directory(positive_dir)?;
    let negative = load_directory(negative_dir)?;

    let mut summary = CrossCheckSummary {
        positive_documents: positive.len(),
        positive_misclassified: Vec::new(),
        negative_documents: negative.len(),
        negative_misclassified: Vec::new(),
    };

    for (id, text) in positive {
        if classifier.classify(&text)? != Category::Positive {
            summary.positive_misclassified.push(id);
        }
    }
    for (id, text) in negative {
        if classifier.classify(&text)? != Category::Negative {
            summary.negative_misclassified.push(id);
        }
    }

    info!(
        "cross-check: {}/{} positive and {}/{} negative misclassified",
        summary.positive_misclassified.len(),
        summary.positive_documents,
        summary.negative_misclassified.len(),
        summary.negative_documents
    );
    Ok(summary)
}

/// Train and print the ranked-word table.
fn run_top_words(args: TopWordsArgs, cli_args: &BayesicArgs) -> Result<()> {
    let classifier = train_from_dirs(&args.positive_dir, &args.negative_dir, false)?;
    let features = top_features(&classifier, args.top);
    print_ranked_features(&features, cli_args)
}
