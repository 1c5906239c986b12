//! Output formatting and report writing for CLI commands.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::{BayesicArgs, OutputFormat};
use crate::error::Result;

/// One classified document: file name and predicted category id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub id: String,
    pub prediction: u8,
}

/// One ranked word: the word and its discriminative-strength metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedFeatureRecord {
    pub feature: String,
    pub weight: f64,
}

/// Summary of a classification run.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationSummary {
    pub documents_classified: usize,
    pub positive_predictions: usize,
    pub negative_predictions: usize,
    pub top_features_reported: usize,
}

/// Summary of a cross-check run.
#[derive(Debug, Serialize, Deserialize)]
pub struct CrossCheckSummary {
    pub positive_documents: usize,
    pub positive_misclassified: Vec<String>,
    pub negative_documents: usize,
    pub negative_misclassified: Vec<String>,
}

/// Write one CSV row per classified document, with an `id,prediction` header.
pub fn write_classification_csv(path: &Path, records: &[ClassificationRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write one CSV row per ranked word, with a `feature,weight` header.
pub fn write_features_csv(path: &Path, records: &[RankedFeatureRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Print a serializable result in the requested output format.
pub fn print_result<T: Serialize + std::fmt::Debug>(value: &T, args: &BayesicArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            println!("{json}");
        }
        OutputFormat::Human => println!("{value:#?}"),
    }
    Ok(())
}

/// Print the ranked-word table in the requested output format.
pub fn print_ranked_features(records: &[RankedFeatureRecord], args: &BayesicArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_result(&records, args)?,
        OutputFormat::Human => {
            println!("{:<24} {:>12}", "feature", "weight");
            for record in records {
                println!("{:<24} {:>12.6}", record.feature, record.weight);
            }
        }
    }
    Ok(())
}
