// src/model/mod.rs
//
// Record shapes written by the upstream analysis job. Read-only: the
// display layer deserializes them once per load and never mutates them.
//
// Every field deserializes leniently. A wrong-typed or null value turns
// into "absent" for that field only, so one bad cell renders a placeholder
// instead of failing the whole file.

mod prediction;
mod prop;

pub use prediction::{ModelInfo, PredictionRecord};
pub use prop::{Analysis, KeyProbabilities, Player, Prop, PropRecord, ThresholdPoint};

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Num(f64),
    Text(String),
    Other(IgnoredAny),
}

/// A number that may arrive as `5.5`, `"5.5"`, `null` or junk.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Lenient(pub Option<f64>);

impl<'de> Deserialize<'de> for Lenient {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Lenient(match Option::<Scalar>::deserialize(d)? {
            Some(Scalar::Num(v)) => Some(v),
            Some(Scalar::Text(s)) => s.trim().parse().ok(),
            Some(Scalar::Other(_)) | None => None,
        }))
    }
}

/// Accepts `5.5`, `"5.5"` or `null`. Anything unparseable becomes `None`.
pub(crate) fn lenient_f64<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Lenient::deserialize(d).map(|l| l.0)
}

/// Non-negative whole counts. `12`, `12.0` and `"12"` all read as 12.
pub(crate) fn lenient_count<'de, D>(d: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_f64(d)?.and_then(|v| {
        (v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX)).then_some(v as u32)
    }))
}

/// Text field; numbers print as-is, `null` and other shapes read as empty.
pub(crate) fn lenient_text<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(d)? {
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Num(v)) => v.to_string(),
        Some(Scalar::Other(_)) | None => s!(),
    })
}

pub(crate) fn lenient_opt_text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(lenient_text(d)?).filter(|s| !s.trim().is_empty()))
}

/// `[1, "2.5", null]` → `[1.0, 2.5]`; a non-array reads as empty.
pub(crate) fn lenient_f64_seq<'de, D>(d: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_seq::<D, Lenient>(d)?.into_iter().filter_map(|l| l.0).collect())
}

/// Array elements that fail to parse are dropped; a non-array reads as empty.
pub(crate) fn lenient_seq<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match serde_json::Value::deserialize(d)? {
        serde_json::Value::Array(items) => {
            items.into_iter().filter_map(|v| T::deserialize(v).ok()).collect()
        }
        _ => Vec::new(),
    })
}

/// Nested objects: `null` or a wrong shape read as the default value.
/// Not for maps whose key order matters; `Value` objects are sorted.
pub(crate) fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let v = serde_json::Value::deserialize(d)?;
    Ok(T::deserialize(v).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_f64")]
        x: Option<f64>,
        #[serde(default, deserialize_with = "lenient_count")]
        n: Option<u32>,
        #[serde(default, deserialize_with = "lenient_text")]
        name: String,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn numbers_accept_text_and_ignore_junk() {
        assert_eq!(row(r#"{"x": 0.5}"#).x, Some(0.5));
        assert_eq!(row(r#"{"x": " 0.5 "}"#).x, Some(0.5));
        assert_eq!(row(r#"{"x": "n/a"}"#).x, None);
        assert_eq!(row(r#"{"x": null}"#).x, None);
        assert_eq!(row(r#"{"x": [1, 2]}"#).x, None);
        assert_eq!(row(r#"{"x": {"v": 1}}"#).x, None);
        assert_eq!(row(r#"{}"#).x, None);
    }

    #[test]
    fn counts_must_be_whole_and_non_negative() {
        assert_eq!(row(r#"{"n": 12}"#).n, Some(12));
        assert_eq!(row(r#"{"n": "12"}"#).n, Some(12));
        assert_eq!(row(r#"{"n": 12.0}"#).n, Some(12));
        assert_eq!(row(r#"{"n": 12.5}"#).n, None);
        assert_eq!(row(r#"{"n": -1}"#).n, None);
        assert_eq!(row(r#"{"n": null}"#).n, None);
    }

    #[test]
    fn text_accepts_numbers() {
        assert_eq!(row(r#"{"name": 23}"#).name, "23");
        assert_eq!(row(r#"{"name": null}"#).name, "");
        assert_eq!(row(r#"{"name": true}"#).name, "");
    }
}
