// src/model/prediction.rs
use serde::Deserialize;

/// One row of `predictions.json`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PredictionRecord {
    #[serde(default, deserialize_with = "super::lenient_text")]
    pub player_name: String,
    #[serde(default, deserialize_with = "super::lenient_text")]
    pub stat_type: String,
    /// The line the model predicts against.
    #[serde(default, deserialize_with = "super::lenient_f64")]
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "super::lenient_f64")]
    pub probability: Option<f64>,
    #[serde(default, deserialize_with = "super::or_default")]
    pub model_info: ModelInfo,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ModelInfo {
    #[serde(default, deserialize_with = "super::lenient_f64")]
    pub accuracy: Option<f64>,
    #[serde(default, deserialize_with = "super::lenient_opt_text")]
    pub model: Option<String>,
}
