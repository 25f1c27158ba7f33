// src/core/classify.rs
//
// Two unrelated classifiers. The props board buckets `over_line` into
// three bands; the predictions board only flags clearly high or clearly
// low probabilities. Their thresholds differ and stay separate.

use std::fmt;

use crate::config::consts::{CONFIDENT_ABOVE, DOUBTFUL_BELOW, HIGH_ABOVE, MEDIUM_ABOVE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    Low,
    Medium,
    High,
}

impl Bucket {
    /// `> 0.8` high, `> 0.6` medium, everything else low.
    /// Exactly 0.8 and 0.6 land in the lower bucket.
    pub fn of(probability: f64) -> Self {
        if probability > HIGH_ABOVE {
            Bucket::High
        } else if probability > MEDIUM_ABOVE {
            Bucket::Medium
        } else {
            Bucket::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::High => "HIGH",
            Bucket::Medium => "MEDIUM",
            Bucket::Low => "LOW",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Bucket::High => "high-probability",
            Bucket::Medium => "medium-probability",
            Bucket::Low => "low-probability",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tone of a prediction card. The band [0.4, 0.6] has no label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Confidence {
    High,
    Low,
}

impl Confidence {
    pub fn of(probability: f64) -> Option<Self> {
        if probability > CONFIDENT_ABOVE {
            Some(Confidence::High)
        } else if probability < DOUBTFUL_BELOW {
            Some(Confidence::Low)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "HIGH",
            Confidence::Low => "LOW",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Confidence::High => "high-probability",
            Confidence::Low => "low-probability",
        }
    }
}
