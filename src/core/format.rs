// src/core/format.rs
//
// Display strings for card fields. Nothing here fails: missing or
// non-finite inputs come back as PLACEHOLDER.

use chrono::DateTime;

use crate::config::consts::{PLACEHOLDER, RECENT_SEP, START_TIME_FMT, THRESHOLD_PREFIX};

/// `0.8234` → `"82.3%"`. Rounds half away from zero at one decimal.
pub fn pct(value: f64) -> String {
    if !value.is_finite() {
        return s!(PLACEHOLDER);
    }
    let rounded = (value * 1000.0).round() / 10.0;
    format!("{rounded:.1}%")
}

pub fn pct_opt(value: Option<f64>) -> String {
    value.map(pct).unwrap_or_else(|| s!(PLACEHOLDER))
}

/// `hits / games` as a percentage; no games (or no usable count) means no rate.
pub fn hit_rate(hits: Option<u32>, games: Option<u32>) -> String {
    match (hits, games) {
        (Some(h), Some(g)) if g > 0 => pct(f64::from(h) / f64::from(g)),
        _ => s!(PLACEHOLDER),
    }
}

/// Signed one-decimal margin: `+3.2`, `-1.0`.
pub fn margin(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let r = (v * 10.0).round() / 10.0;
            if r == 0.0 {
                s!("0.0")
            } else if r > 0.0 {
                format!("+{r:.1}")
            } else {
                format!("{r:.1}")
            }
        }
        _ => s!(PLACEHOLDER),
    }
}

pub fn one_decimal(value: f64) -> String {
    if !value.is_finite() {
        return s!(PLACEHOLDER);
    }
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

pub fn one_decimal_opt(value: Option<f64>) -> String {
    value.map(one_decimal).unwrap_or_else(|| s!(PLACEHOLDER))
}

/// Line scores print the way the file wrote them: `5.5`, `20`.
pub fn line(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => v.to_string(),
        _ => s!(PLACEHOLDER),
    }
}

/// `[12.0, 8.0, 15.5]` → `"12.0 → 8.0 → 15.5"`, in the given order.
pub fn recent_values(values: &[f64]) -> String {
    if values.is_empty() {
        return s!(PLACEHOLDER);
    }
    values
        .iter()
        .map(|v| one_decimal(*v))
        .collect::<Vec<_>>()
        .join(RECENT_SEP)
}

/// `over_plus_2` → `plus 2`, `over_line` → `line`.
pub fn threshold_label(key: &str) -> String {
    key.strip_prefix(THRESHOLD_PREFIX).unwrap_or(key).replace('_', " ")
}

/// RFC 3339 timestamps print in their own offset; anything else verbatim.
pub fn start_time(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return s!(PLACEHOLDER);
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(t) => t.format(START_TIME_FMT).to_string(),
        Err(_) => s!(raw),
    }
}

pub fn text(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() { s!(PLACEHOLDER) } else { s!(v) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_rounds_to_one_decimal() {
        assert_eq!(pct(0.8234), "82.3%");
        assert_eq!(pct(0.5), "50.0%");
        assert_eq!(pct(1.0), "100.0%");
        assert_eq!(pct(0.0), "0.0%");
        assert_eq!(pct(f64::NAN), PLACEHOLDER);
    }

    #[test]
    fn hit_rate_with_no_games_is_placeholder() {
        assert_eq!(hit_rate(Some(0), Some(0)), PLACEHOLDER);
        assert_eq!(hit_rate(Some(7), Some(10)), "70.0%");
        assert_eq!(hit_rate(Some(2), Some(3)), "66.7%");
        assert_eq!(hit_rate(None, Some(3)), PLACEHOLDER);
        assert_eq!(hit_rate(Some(2), None), PLACEHOLDER);
    }

    #[test]
    fn margin_is_signed() {
        assert_eq!(margin(Some(3.24)), "+3.2");
        assert_eq!(margin(Some(-1.0)), "-1.0");
        assert_eq!(margin(Some(0.0)), "0.0");
        assert_eq!(margin(Some(-0.01)), "0.0");
        assert_eq!(margin(None), PLACEHOLDER);
    }

    #[test]
    fn recent_values_join_oldest_first() {
        assert_eq!(recent_values(&[12.0, 8.0, 15.46]), "12.0 → 8.0 → 15.5");
        assert_eq!(recent_values(&[]), PLACEHOLDER);
    }

    #[test]
    fn threshold_labels() {
        assert_eq!(threshold_label("over_line"), "line");
        assert_eq!(threshold_label("over_plus_2"), "plus 2");
        assert_eq!(threshold_label("under_minus_5"), "under minus 5");
    }

    #[test]
    fn start_time_falls_back_to_raw() {
        assert_eq!(start_time("2025-01-14T19:30:00-05:00"), "Jan 14, 7:30 PM");
        assert_eq!(start_time("tonight"), "tonight");
        assert_eq!(start_time(""), PLACEHOLDER);
    }

    #[test]
    fn line_keeps_natural_form() {
        assert_eq!(line(Some(5.5)), "5.5");
        assert_eq!(line(Some(20.0)), "20");
        assert_eq!(line(None), PLACEHOLDER);
    }
}
