// src/model/prop.rs
use std::fmt;

use serde::de::{Deserializer, Error as DeError, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use super::Lenient;

use crate::config::consts::OVER_LINE_KEY;

/// One entry of `prop_analysis.json`: the offered prop, the player's
/// history against its line, and the fitted probabilities.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PropRecord {
    #[serde(default, deserialize_with = "super::or_default")]
    pub prop: Prop,
    #[serde(default, deserialize_with = "super::or_default")]
    pub analysis: Analysis,
    #[serde(default)]
    pub key_probabilities: KeyProbabilities,
    #[serde(default, deserialize_with = "super::lenient_seq")]
    pub probability_table: Vec<ThresholdPoint>,
}

impl PropRecord {
    pub fn over_line(&self) -> Option<f64> {
        self.key_probabilities.get(OVER_LINE_KEY)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Prop {
    #[serde(default, deserialize_with = "super::or_default")]
    pub player: Player,
    #[serde(default, deserialize_with = "super::lenient_text")]
    pub stat_type: String,
    #[serde(default, deserialize_with = "super::lenient_f64")]
    pub line_score: Option<f64>,
    #[serde(default, deserialize_with = "super::lenient_text")]
    pub start_time: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Player {
    #[serde(default, deserialize_with = "super::lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "super::lenient_text")]
    pub team_name: String,
    #[serde(default, deserialize_with = "super::lenient_text")]
    pub position: String,
}

/// Season history against the line. Counts are `None` when the file has
/// no usable value; the card then shows no season rate.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Analysis {
    #[serde(default, deserialize_with = "super::lenient_count")]
    pub games_played: Option<u32>,
    #[serde(default, deserialize_with = "super::lenient_count")]
    pub times_above_line: Option<u32>,
    #[serde(default, deserialize_with = "super::lenient_f64")]
    pub recent_hit_rate: Option<f64>,
    #[serde(default, deserialize_with = "super::lenient_f64")]
    pub recent_average: Option<f64>,
    /// Oldest first.
    #[serde(default, deserialize_with = "super::lenient_f64_seq")]
    pub recent_values: Vec<f64>,
    /// Season mean of the stat.
    #[serde(default, deserialize_with = "super::lenient_f64")]
    pub average_value: Option<f64>,
    #[serde(default, deserialize_with = "super::lenient_f64")]
    pub average_minutes: Option<f64>,
    /// Mean margin over the line in the games that went over.
    #[serde(default, deserialize_with = "super::lenient_f64")]
    pub average_difference: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ThresholdPoint {
    #[serde(default, deserialize_with = "super::lenient_f64")]
    pub threshold: Option<f64>,
    #[serde(default, deserialize_with = "super::lenient_f64")]
    pub probability: Option<f64>,
}

/// Named thresholds (`over_line`, `over_plus_2`, ...) in the order the
/// file lists them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyProbabilities(Vec<(String, Option<f64>)>);

impl KeyProbabilities {
    /// First entry wins if the file repeats a key.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.iter().find(|(k, _)| k == key).and_then(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl<'de> Deserialize<'de> for KeyProbabilities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = KeyProbabilities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of threshold name to probability")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, Lenient(value))) = map.next_entry::<String, Lenient>()? {
                    entries.push((key, value));
                }
                Ok(KeyProbabilities(entries))
            }

            // Any other shape means "no thresholds", not a broken file.
            fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
            where
                S: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(KeyProbabilities::default())
            }

            fn visit_unit<E: DeError>(self) -> Result<Self::Value, E> {
                Ok(KeyProbabilities::default())
            }

            fn visit_bool<E: DeError>(self, _: bool) -> Result<Self::Value, E> {
                Ok(KeyProbabilities::default())
            }

            fn visit_i64<E: DeError>(self, _: i64) -> Result<Self::Value, E> {
                Ok(KeyProbabilities::default())
            }

            fn visit_u64<E: DeError>(self, _: u64) -> Result<Self::Value, E> {
                Ok(KeyProbabilities::default())
            }

            fn visit_f64<E: DeError>(self, _: f64) -> Result<Self::Value, E> {
                Ok(KeyProbabilities::default())
            }

            fn visit_str<E: DeError>(self, _: &str) -> Result<Self::Value, E> {
                Ok(KeyProbabilities::default())
            }
        }

        deserializer.deserialize_any(OrderedVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_probabilities_keep_file_order() {
        let kp: KeyProbabilities = serde_json::from_str(
            r#"{"over_plus_5": 0.1, "over_line": 0.55, "over_minus_2": null, "over_minus_5": 0.97}"#,
        )
        .unwrap();
        let keys: Vec<&str> = kp.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["over_plus_5", "over_line", "over_minus_2", "over_minus_5"]);
        assert_eq!(kp.get("over_line"), Some(0.55));
        assert_eq!(kp.get("over_minus_2"), None);
    }

    #[test]
    fn line_score_accepts_text_and_missing_fields_default() {
        let rec: PropRecord = serde_json::from_str(
            r#"{"prop": {"player": {"name": "Jalen Brunson"}, "stat_type": "Assists", "line_score": "6.5"},
                "analysis": {"games_played": 3, "times_above_line": 2, "recent_values": [5, 8, 7]}}"#,
        )
        .unwrap();
        assert_eq!(rec.prop.line_score, Some(6.5));
        assert_eq!(rec.prop.player.team_name, "");
        assert_eq!(rec.analysis.recent_values, vec![5.0, 8.0, 7.0]);
        assert!(rec.key_probabilities.is_empty());
        assert_eq!(rec.over_line(), None);
    }

    #[test]
    fn key_probabilities_tolerate_text_and_odd_shapes() {
        let kp: KeyProbabilities =
            serde_json::from_str(r#"{"over_line": "0.85", "over_plus_2": "soon", "over_minus_2": [1]}"#).unwrap();
        let got: Vec<(&str, Option<f64>)> = kp.iter().collect();
        assert_eq!(got, [("over_line", Some(0.85)), ("over_plus_2", None), ("over_minus_2", None)]);

        for odd in ["null", "[0.5, 0.6]", "\"0.5\"", "7"] {
            let kp: KeyProbabilities = serde_json::from_str(odd).unwrap();
            assert!(kp.is_empty(), "{odd}");
        }
    }

    #[test]
    fn malformed_nested_fields_fall_back_per_field() {
        let rec: PropRecord = serde_json::from_str(
            r#"{"prop": {"player": null, "stat_type": 3, "line_score": {"x": 1}},
                "analysis": {"games_played": null, "times_above_line": "4", "recent_hit_rate": "0.5",
                             "recent_values": [10, "12.5", null, "x"], "average_minutes": "33.1"},
                "probability_table": [{"threshold": 20, "probability": "0.4"}, "junk", {"threshold": "x"}]}"#,
        )
        .unwrap();
        assert_eq!(rec.prop.player, Player::default());
        assert_eq!(rec.prop.stat_type, "3");
        assert_eq!(rec.prop.line_score, None);
        assert_eq!(rec.analysis.games_played, None);
        assert_eq!(rec.analysis.times_above_line, Some(4));
        assert_eq!(rec.analysis.recent_hit_rate, Some(0.5));
        assert_eq!(rec.analysis.recent_values, vec![10.0, 12.5]);
        assert_eq!(rec.analysis.average_minutes, Some(33.1));
        assert_eq!(rec.probability_table, vec![
            ThresholdPoint { threshold: Some(20.0), probability: Some(0.4) },
            ThresholdPoint { threshold: None, probability: None },
        ]);

        let rec: PropRecord = serde_json::from_str(r#"{"prop": "gone", "analysis": 5}"#).unwrap();
        assert_eq!(rec.prop, Prop::default());
        assert_eq!(rec.analysis, Analysis::default());
    }
}
