// tests/load_failure.rs
//
// One load per board: success renders, any failure (missing file, bad
// JSON, HTTP error) leaves exactly one fallback notice.
//
use std::{
    io::{Read, Write},
    net::TcpListener,
    thread,
};

use prop_board::board::{mount, present, PredictionsBoard, PropsBoard};
use prop_board::config::consts::LOAD_FAILED;
use prop_board::config::options::BucketFilter;
use prop_board::error::LoadError;
use prop_board::loader::{self, Source};
use prop_board::model::PredictionRecord;
use prop_board::render::{CardList, Container, HtmlPage};
use tempfile::TempDir;

/// Serve one canned response on a loopback port.
fn serve_once(response: &'static str) -> Source {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    Source::Http { host: "127.0.0.1".into(), port, path: "/prop_analysis.json".into() }
}

fn assert_fallback(list: &CardList) {
    assert_eq!(list.notice_text(), Some(LOAD_FAILED));
    assert!(list.is_empty());
}

#[test]
fn missing_file_shows_fallback() {
    let dir = TempDir::new().unwrap();
    let source = Source::File(dir.path().join("nope.json"));

    let mut list = CardList::new();
    let board = mount::<PropsBoard>(&source, BucketFilter::All, &mut list);
    assert!(board.is_none());
    assert_fallback(&list);

    assert!(matches!(loader::load::<PredictionRecord>(&source), Err(LoadError::Io { .. })));
}

#[test]
fn malformed_json_shows_fallback() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("predictions.json");
    std::fs::write(&path, "[{\"player_name\": ").unwrap();
    let source = Source::File(path);

    let mut list = CardList::new();
    assert!(mount::<PredictionsBoard>(&source, (), &mut list).is_none());
    assert_fallback(&list);

    assert!(matches!(loader::load::<PredictionRecord>(&source), Err(LoadError::Parse { .. })));
}

#[test]
fn non_array_document_is_a_parse_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("props.json");
    std::fs::write(&path, "{\"data\": []}").unwrap();

    let mut list = CardList::new();
    assert!(mount::<PropsBoard>(&Source::File(path), BucketFilter::All, &mut list).is_none());
    assert_fallback(&list);
}

#[test]
fn http_error_status_shows_fallback() {
    let source = serve_once("HTTP/1.0 404 Not Found\r\nContent-Length: 0\r\n\r\n");

    let mut list = CardList::new();
    let outcome = loader::load(&source);
    assert!(matches!(outcome, Err(LoadError::Status { status: 404, .. })));

    assert!(present::<PropsBoard>(outcome, BucketFilter::All, &mut list).is_none());
    assert_fallback(&list);
}

#[test]
fn http_success_renders() {
    let source = serve_once(
        "HTTP/1.0 200 OK\r\nContent-Type: application/json\r\n\r\n\
         [{\"prop\": {\"player\": {\"name\": \"Over The Wire\"}, \"line_score\": 2.5},\
           \"key_probabilities\": {\"over_line\": 0.65}}]",
    );

    let mut list = CardList::new();
    let board = mount::<PropsBoard>(&source, BucketFilter::Medium, &mut list);
    assert!(board.is_some());
    assert_eq!(list.notice_text(), None);
    assert_eq!(list.len(), 1);
    assert_eq!(list.cards()[0].title(), "Over The Wire");
}

#[test]
fn file_success_renders_and_allows_rerender() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prop_analysis.json");
    std::fs::write(
        &path,
        r#"[
            {"prop": {"player": {"name": "A"}}, "key_probabilities": {"over_line": 0.9}},
            {"prop": {"player": {"name": "B"}}, "key_probabilities": {"over_line": 0.3}}
        ]"#,
    )
    .unwrap();

    let mut list = CardList::new();
    let board = mount::<PropsBoard>(&Source::File(path), BucketFilter::All, &mut list).unwrap();
    assert_eq!(list.len(), 2);

    use prop_board::board::Board;
    board.render(BucketFilter::Low, &mut list);
    assert_eq!(list.len(), 1);
    assert_eq!(list.cards()[0].title(), "B");
}

#[test]
fn fallback_replaces_html_content() {
    let dir = TempDir::new().unwrap();
    let mut page = HtmlPage::new("Predictions");
    page.notice("stale");

    let source = Source::File(dir.path().join("missing.json"));
    assert!(mount::<PredictionsBoard>(&source, (), &mut page).is_none());

    let html = page.finish();
    assert_eq!(html.matches(LOAD_FAILED).count(), 1);
    assert!(!html.contains("stale"));
}

#[test]
fn malformed_fields_do_not_blank_the_board() {
    use prop_board::config::consts::PLACEHOLDER;
    use prop_board::core::Bucket;
    use prop_board::render::Card;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prop_analysis.json");
    std::fs::write(
        &path,
        r#"[
            {"prop": {"player": {"name": "Good"}, "line_score": 5.5},
             "analysis": {"games_played": 10, "times_above_line": 6},
             "key_probabilities": {"over_line": 0.7}},
            {"prop": {"player": {"name": "Text Line"}}, "key_probabilities": {"over_line": "0.85"}},
            {"prop": {"player": {"name": "Null Games"}},
             "analysis": {"games_played": null, "times_above_line": "x"}},
            {"prop": {"player": {"name": "Text Rate"}}, "analysis": {"recent_hit_rate": "0.5"}},
            {"prop": {"player": null, "start_time": 1700000000}, "key_probabilities": []}
        ]"#,
    )
    .unwrap();

    let mut list = CardList::new();
    let board = mount::<PropsBoard>(&Source::File(path), BucketFilter::All, &mut list);
    assert!(board.is_some());
    assert_eq!(list.notice_text(), None);
    assert_eq!(list.len(), 5);

    let cards: Vec<_> = list
        .cards()
        .iter()
        .map(|c| match c {
            Card::Prop(p) => p,
            other => panic!("unexpected card {other:?}"),
        })
        .collect();
    assert_eq!(cards[0].player, "Good");
    assert_eq!(cards[0].season_rate, "60.0%");
    assert_eq!(cards[0].bucket, Some(Bucket::Medium));
    assert_eq!(cards[1].bucket, Some(Bucket::High));
    assert_eq!(cards[1].over_line, "85.0%");
    assert_eq!(cards[2].season_rate, PLACEHOLDER);
    assert_eq!(cards[3].recent_rate, "50.0%");
    assert_eq!(cards[4].player, PLACEHOLDER);
    assert_eq!(cards[4].start, "1700000000");
    assert!(cards[4].thresholds.is_empty());
}

#[test]
fn malformed_prediction_fields_still_rank() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("predictions.json");
    std::fs::write(
        &path,
        r#"[
            {"player_name": "Numeric", "probability": 0.65, "model_info": {"accuracy": 0.95}},
            {"player_name": "Text", "probability": "0.7", "model_info": {"accuracy": "0.92"}},
            {"player_name": "Broken Info", "probability": 0.99, "model_info": "n/a"},
            {"player_name": 42, "probability": [0.9], "model_info": {"accuracy": 0.91, "model": null}}
        ]"#,
    )
    .unwrap();

    let mut list = CardList::new();
    assert!(mount::<PredictionsBoard>(&Source::File(path), (), &mut list).is_some());
    assert_eq!(list.notice_text(), None);

    let order: Vec<&str> = list.cards().iter().map(|c| c.title()).collect();
    assert_eq!(order, ["Text", "Numeric", "42"]);
}
