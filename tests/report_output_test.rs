//! Integration tests for the CLI pipeline: corpus loading, training,
//! classification reports, and cross-checking.

use std::fs;
use std::path::Path;

use bayesic::cli::commands::{
    classify_directory, cross_check, load_directory, top_features, train_from_dirs,
};
use bayesic::error::Result;
use tempfile::TempDir;

fn write_corpus(dir: &Path, documents: &[(&str, &str)]) {
    fs::create_dir_all(dir).unwrap();
    for (name, text) in documents {
        fs::write(dir.join(name), text).unwrap();
    }
}

fn fixture() -> (TempDir, std::path::PathBuf, std::path::PathBuf, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let positive = temp_dir.path().join("spam");
    let negative = temp_dir.path().join("ham");
    let unknown = temp_dir.path().join("unknown");

    write_corpus(
        &positive,
        &[
            ("spam1.txt", "special offer claim your prize today"),
            ("spam2.txt", "free prize winner claim now offer"),
        ],
    );
    write_corpus(
        &negative,
        &[
            ("ham1.txt", "meeting notes attached please review"),
            ("ham2.txt", "quarterly report agenda meeting tomorrow"),
        ],
    );
    write_corpus(
        &unknown,
        &[
            ("mail1.txt", "claim your free prize"),
            ("mail2.txt", "agenda for the quarterly meeting"),
        ],
    );

    (temp_dir, positive, negative, unknown)
}

#[test]
fn test_load_directory_is_sorted_and_complete() -> Result<()> {
    let (_guard, positive, _, _) = fixture();
    let documents = load_directory(&positive)?;

    let names: Vec<&str> = documents.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["spam1.txt", "spam2.txt"]);
    assert!(documents[0].1.contains("special offer"));
    Ok(())
}

#[test]
fn test_load_directory_tolerates_invalid_utf8() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("raw.txt"), b"claim \xff\xfe prize").unwrap();

    let documents = load_directory(temp_dir.path())?;
    assert_eq!(documents.len(), 1);
    assert!(documents[0].1.contains("claim"));
    assert!(documents[0].1.contains("prize"));
    Ok(())
}

#[test]
fn test_classify_directory_predictions() -> Result<()> {
    let (_guard, positive, negative, unknown) = fixture();
    let classifier = train_from_dirs(&positive, &negative, false)?;

    let records = classify_directory(&classifier, &unknown)?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "mail1.txt");
    assert_eq!(records[0].prediction, 1);
    assert_eq!(records[1].id, "mail2.txt");
    assert_eq!(records[1].prediction, 0);
    Ok(())
}

#[test]
fn test_parallel_training_classifies_identically() -> Result<()> {
    let (_guard, positive, negative, unknown) = fixture();
    let sequential = train_from_dirs(&positive, &negative, false)?;
    let parallel = train_from_dirs(&positive, &negative, true)?;

    let sequential_records = classify_directory(&sequential, &unknown)?;
    let parallel_records = classify_directory(&parallel, &unknown)?;
    for (a, b) in sequential_records.iter().zip(&parallel_records) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.prediction, b.prediction);
    }
    Ok(())
}

#[test]
fn test_top_features_limit_and_order() -> Result<()> {
    let (_guard, positive, negative, _) = fixture();
    let classifier = train_from_dirs(&positive, &negative, false)?;

    let all = top_features(&classifier, 0);
    assert_eq!(all.len(), classifier.vocabulary().unique_words());

    let limited = top_features(&classifier, 3);
    assert_eq!(limited.len(), 3);
    for pair in limited.windows(2) {
        assert!(pair[0].weight >= pair[1].weight);
    }
    Ok(())
}

#[test]
fn test_cross_check_on_separable_corpus() -> Result<()> {
    let (_guard, positive, negative, _) = fixture();
    let classifier = train_from_dirs(&positive, &negative, false)?;

    let summary = cross_check(&classifier, &positive, &negative)?;
    assert_eq!(summary.positive_documents, 2);
    assert_eq!(summary.negative_documents, 2);
    assert!(summary.positive_misclassified.is_empty());
    assert!(summary.negative_misclassified.is_empty());
    Ok(())
}
