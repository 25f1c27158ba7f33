// tests/filter_sort.rs
//
// Props bucket filter and predictions ranking over in-memory records.
//
use prop_board::config::options::BucketFilter;
use prop_board::filter::{filter_props, rank_predictions};
use prop_board::model::{PredictionRecord, PropRecord};
use serde_json::json;

fn prop(name: &str, over_line: f64) -> PropRecord {
    serde_json::from_value(json!({
        "prop": { "player": { "name": name, "team_name": "Team", "position": "G" },
                  "stat_type": "Points", "line_score": 20.5, "start_time": "" },
        "analysis": { "games_played": 10, "times_above_line": 5, "recent_hit_rate": 0.5,
                      "recent_average": 20.0, "recent_values": [18.0, 22.0] },
        "key_probabilities": { "over_line": over_line }
    }))
    .unwrap()
}

fn prediction(name: &str, accuracy: f64, probability: f64) -> PredictionRecord {
    serde_json::from_value(json!({
        "player_name": name, "stat_type": "Rebounds", "value": 5.5,
        "probability": probability, "model_info": { "accuracy": accuracy }
    }))
    .unwrap()
}

fn names<'a>(v: &[&'a PropRecord]) -> Vec<&'a str> {
    v.iter().map(|r| r.prop.player.name.as_str()).collect()
}

fn sample() -> Vec<PropRecord> {
    vec![
        prop("a", 0.95),
        prop("b", 0.80),
        prop("c", 0.61),
        prop("d", 0.60),
        prop("e", 0.05),
        prop("f", 0.81),
        prop("g", 1.0),
    ]
}

#[test]
fn high_keeps_exactly_above_point_eight() {
    let records = sample();
    assert_eq!(names(&filter_props(&records, BucketFilter::High)), ["a", "f", "g"]);
    assert_eq!(names(&filter_props(&records, BucketFilter::Medium)), ["b", "c"]);
    assert_eq!(names(&filter_props(&records, BucketFilter::Low)), ["d", "e"]);
}

#[test]
fn buckets_partition_unit_interval() {
    let records = sample();
    let mut union: Vec<&str> = [BucketFilter::High, BucketFilter::Medium, BucketFilter::Low]
        .into_iter()
        .flat_map(|f| names(&filter_props(&records, f)))
        .collect();
    union.sort_unstable();
    let mut all = names(&filter_props(&records, BucketFilter::All));
    all.sort_unstable();
    assert_eq!(union, all);
    assert_eq!(all.len(), records.len());
}

#[test]
fn all_bypasses_bounds_and_keeps_order() {
    let mut records = sample();
    records.push(prop("out_of_range", 1.3));
    records.push(PropRecord::default()); // no over_line at all

    let all = filter_props(&records, BucketFilter::All);
    assert_eq!(all.len(), records.len());
    for (kept, record) in all.iter().zip(records.iter()) {
        assert!(std::ptr::eq(*kept, record));
    }

    // Outside (0,1] or missing: only "all" shows them.
    assert!(!names(&filter_props(&records, BucketFilter::High)).contains(&"out_of_range"));
    assert_eq!(filter_props(&records, BucketFilter::Low).len(), 2);
}

#[test]
fn predictions_cut_by_accuracy_then_rank_descending() {
    let records = vec![
        prediction("p0", 0.95, 0.3),
        prediction("p1", 0.85, 0.9),
        prediction("p2", 0.92, 0.7),
    ];
    let ranked = rank_predictions(&records);
    let got: Vec<(f64, f64)> = ranked
        .iter()
        .map(|r| (r.probability.unwrap(), r.model_info.accuracy.unwrap()))
        .collect();
    assert_eq!(got, [(0.7, 0.92), (0.3, 0.95)]);

    // Source untouched
    assert_eq!(records[0].player_name, "p0");
    assert_eq!(records[1].player_name, "p1");
}

#[test]
fn equal_probabilities_keep_file_order() {
    let records = vec![
        prediction("first", 0.90, 0.5),
        prediction("top", 0.99, 0.8),
        prediction("second", 0.91, 0.5),
        prediction("cut", 0.89, 0.99), // exactly 0.89 is not above the cutoff
        prediction("third", 0.93, 0.5),
    ];
    let ranked: Vec<&str> = rank_predictions(&records).iter().map(|r| r.player_name.as_str()).collect();
    assert_eq!(ranked, ["top", "first", "second", "third"]);
}

#[test]
fn missing_accuracy_is_dropped_and_missing_probability_sinks() {
    let mut no_acc = prediction("no_acc", 0.0, 0.9);
    no_acc.model_info.accuracy = None;
    let mut no_prob = prediction("no_prob", 0.95, 0.0);
    no_prob.probability = None;

    let records = vec![no_prob, no_acc, prediction("low", 0.95, 0.1)];
    let ranked: Vec<&str> = rank_predictions(&records).iter().map(|r| r.player_name.as_str()).collect();
    assert_eq!(ranked, ["low", "no_prob"]);
}
