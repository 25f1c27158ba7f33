// src/render/cards.rs
//
// Record → card projection. Every field is a ready-to-show string so the
// GUI, the HTML page, the text report and the exporter agree on output.

use std::fmt;

use crate::core::{format as fmt_, Bucket, Confidence};
use crate::model::{PredictionRecord, PropRecord};

#[derive(Clone, Debug, PartialEq)]
pub enum Card {
    Prop(PropCard),
    Prediction(PredictionCard),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdRow {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropCard {
    pub player: String,
    pub team: String,
    pub position: String,
    pub stat_type: String,
    pub line: String,
    pub start: String,
    /// Badge from `over_line`; none when the file has no `over_line`.
    pub bucket: Option<Bucket>,
    pub over_line: String,
    pub recent_rate: String,
    pub season_rate: String,
    pub recent_average: String,
    pub recent_values: String,
    pub season_average: String,
    pub average_minutes: String,
    /// Mean margin over the line when the player went over.
    pub average_margin: String,
    pub thresholds: Vec<ThresholdRow>,
    /// Fitted distribution from the file, `threshold → P(over)`.
    pub distribution: Vec<ThresholdRow>,
}

impl PropCard {
    pub const HEADERS: [&'static str; 15] = [
        "Player", "Team", "Position", "Stat", "Line", "Start", "Over line",
        "Bucket", "Recent hit rate", "Season hit rate", "Recent avg", "Recent values",
        "Season avg", "Avg minutes", "Avg margin when over",
    ];

    pub fn from_record(r: &PropRecord) -> Self {
        let a = &r.analysis;
        let over_line = r.over_line();

        let thresholds = r
            .key_probabilities
            .iter()
            .map(|(key, p)| ThresholdRow { label: fmt_::threshold_label(key), value: fmt_::pct_opt(p) })
            .collect();

        let distribution = r
            .probability_table
            .iter()
            .map(|pt| ThresholdRow {
                label: fmt_::one_decimal_opt(pt.threshold),
                value: fmt_::pct_opt(pt.probability),
            })
            .collect();

        Self {
            player: fmt_::text(&r.prop.player.name),
            team: fmt_::text(&r.prop.player.team_name),
            position: fmt_::text(&r.prop.player.position),
            stat_type: fmt_::text(&r.prop.stat_type),
            line: fmt_::line(r.prop.line_score),
            start: fmt_::start_time(&r.prop.start_time),
            bucket: over_line.filter(|p| p.is_finite()).map(Bucket::of),
            over_line: fmt_::pct_opt(over_line),
            recent_rate: fmt_::pct_opt(a.recent_hit_rate),
            season_rate: fmt_::hit_rate(a.times_above_line, a.games_played),
            recent_average: fmt_::one_decimal_opt(a.recent_average),
            recent_values: fmt_::recent_values(&a.recent_values),
            season_average: fmt_::one_decimal_opt(a.average_value),
            average_minutes: fmt_::one_decimal_opt(a.average_minutes),
            average_margin: fmt_::margin(a.average_difference),
            thresholds,
            distribution,
        }
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.player.clone(),
            self.team.clone(),
            self.position.clone(),
            self.stat_type.clone(),
            self.line.clone(),
            self.start.clone(),
            self.over_line.clone(),
            self.bucket.map(|b| s!(b.label())).unwrap_or_default(),
            self.recent_rate.clone(),
            self.season_rate.clone(),
            self.recent_average.clone(),
            self.recent_values.clone(),
            self.season_average.clone(),
            self.average_minutes.clone(),
            self.average_margin.clone(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PredictionCard {
    pub player: String,
    pub stat_type: String,
    pub line: String,
    pub probability: String,
    pub accuracy: String,
    pub model: Option<String>,
    pub confidence: Option<Confidence>,
}

impl PredictionCard {
    pub const HEADERS: [&'static str; 6] = [
        "Player", "Stat", "Line", "Probability", "Accuracy", "Confidence",
    ];

    pub fn from_record(r: &PredictionRecord) -> Self {
        Self {
            player: fmt_::text(&r.player_name),
            stat_type: fmt_::text(&r.stat_type),
            line: fmt_::line(r.value),
            probability: fmt_::pct_opt(r.probability),
            accuracy: fmt_::pct_opt(r.model_info.accuracy),
            model: r.model_info.model.clone().filter(|m| !m.trim().is_empty()),
            confidence: r.probability.and_then(Confidence::of),
        }
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.player.clone(),
            self.stat_type.clone(),
            self.line.clone(),
            self.probability.clone(),
            self.accuracy.clone(),
            self.confidence.map(|c| s!(c.label())).unwrap_or_default(),
        ]
    }
}

impl Card {
    /// Export row, aligned with the card type's `HEADERS`.
    pub fn to_row(&self) -> Vec<String> {
        match self {
            Card::Prop(c) => c.to_row(),
            Card::Prediction(c) => c.to_row(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Card::Prop(c) => &c.player,
            Card::Prediction(c) => &c.player,
        }
    }
}

/// Plain-text block for terminal reports.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Prop(c) => {
                writeln!(f, "{} - {} {}", c.player, c.stat_type, c.line)?;
                writeln!(f, "{} | {} | {}", c.team, c.position, c.start)?;
                match c.bucket {
                    Some(b) => writeln!(f, "Probability over line: {} [{}]", c.over_line, b)?,
                    None => writeln!(f, "Probability over line: {}", c.over_line)?,
                }
                writeln!(f, "Recent hit rate: {}", c.recent_rate)?;
                writeln!(f, "Season hit rate: {}", c.season_rate)?;
                writeln!(f, "Recent average: {}", c.recent_average)?;
                writeln!(f, "Recent values: {}", c.recent_values)?;
                writeln!(f, "Season average: {}", c.season_average)?;
                writeln!(f, "Average minutes: {}", c.average_minutes)?;
                writeln!(f, "Average margin when over: {}", c.average_margin)?;
                for row in &c.thresholds {
                    writeln!(f, "  over {}: {}", row.label, row.value)?;
                }
                Ok(())
            }
            Card::Prediction(c) => {
                writeln!(f, "{} - {} {}", c.player, c.stat_type, c.line)?;
                match c.confidence {
                    Some(conf) => writeln!(f, "Probability: {} [{}]", c.probability, conf.label())?,
                    None => writeln!(f, "Probability: {}", c.probability)?,
                }
                match &c.model {
                    Some(m) => writeln!(f, "Model accuracy: {} ({m})", c.accuracy),
                    None => writeln!(f, "Model accuracy: {}", c.accuracy),
                }
            }
        }
    }
}
