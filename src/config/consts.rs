// src/config/consts.rs

// Record files (relative to the working directory)
pub const DEFAULT_PROPS_FILE: &str = "prop_analysis.json";
pub const DEFAULT_PREDICTIONS_FILE: &str = "predictions.json";

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "prop_board/0.3";

// Props board buckets: strictly-greater-than on both edges
pub const HIGH_ABOVE: f64 = 0.8;
pub const MEDIUM_ABOVE: f64 = 0.6;

// Predictions board
pub const MIN_MODEL_ACCURACY: f64 = 0.89;
pub const CONFIDENT_ABOVE: f64 = 0.6;
pub const DOUBTFUL_BELOW: f64 = 0.4;

// Display
pub const PLACEHOLDER: &str = "N/A";
pub const RECENT_SEP: &str = " → ";
pub const THRESHOLD_PREFIX: &str = "over_";
pub const OVER_LINE_KEY: &str = "over_line";
pub const LOAD_FAILED: &str = "Unable to load data. Please try again later.";
pub const START_TIME_FMT: &str = "%b %-d, %-I:%M %p";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_FILTER: &str = "prop_board=debug";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
