// src/filter.rs
//
// Pure views over a board's records. Both return borrowed records in
// display order and leave the source slice untouched.

use std::cmp::Ordering;

use crate::config::{consts::MIN_MODEL_ACCURACY, options::BucketFilter};
use crate::model::{PredictionRecord, PropRecord};

/// `All` keeps every record in file order; a bucket keeps records whose
/// `over_line` lies in its `(lower, upper]` interval.
pub fn filter_props(records: &[PropRecord], filter: BucketFilter) -> Vec<&PropRecord> {
    if filter == BucketFilter::All {
        return records.iter().collect();
    }
    records.iter().filter(|r| filter.admits(r.over_line())).collect()
}

/// Records from models with accuracy above 0.89, most probable first.
/// Ties keep their file order.
pub fn rank_predictions(records: &[PredictionRecord]) -> Vec<&PredictionRecord> {
    let mut kept: Vec<&PredictionRecord> = records
        .iter()
        .filter(|r| r.model_info.accuracy.is_some_and(|a| a > MIN_MODEL_ACCURACY))
        .collect();
    // sort_by is stable
    kept.sort_by(|a, b| by_probability_desc(a.probability, b.probability));
    kept
}

// Missing probabilities sink to the bottom.
fn by_probability_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.unwrap_or(f64::NEG_INFINITY);
    let b = b.unwrap_or(f64::NEG_INFINITY);
    b.total_cmp(&a)
}
