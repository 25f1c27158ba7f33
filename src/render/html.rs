// src/render/html.rs
//
// Standalone HTML page target. Each card is stamped from a fixed template;
// all record text is escaped before it reaches a slot.

use super::{Card, Container, PredictionCard, PropCard, ThresholdRow};
use crate::core::html::{escape, fill};

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{title}}</title>
<style>
body { font-family: system-ui, sans-serif; background: #f4f5f7; margin: 0; padding: 24px; }
h1 { margin: 0 0 16px; }
#content { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px; }
.card { background: #fff; border-radius: 8px; padding: 16px; box-shadow: 0 1px 3px rgba(0,0,0,.12); border-top: 4px solid #9aa0a6; }
.card.high-probability { border-top-color: #1e8e3e; }
.card.medium-probability { border-top-color: #f9ab00; }
.card.low-probability { border-top-color: #d93025; }
.meta { color: #5f6368; font-size: .85em; }
.badge { float: right; font-size: .75em; font-weight: 700; }
.grid { display: grid; grid-template-columns: 1fr auto; gap: 2px 12px; font-size: .9em; }
.notice { grid-column: 1 / -1; padding: 24px; text-align: center; color: #d93025; }
</style>
</head>
<body>
<h1>{{title}}</h1>
<div id="content">
{{content}}</div>
</body>
</html>
"#;

const PROP_CARD: &str = r#"<div class="card {{class}}">
  <span class="badge">{{badge}}</span>
  <h3>{{player}}</h3>
  <div class="meta">{{team}} · {{position}} · {{start}}</div>
  <p><strong>{{stat}}</strong> over {{line}}</p>
  <div class="grid">
    <span>Probability over line</span><span>{{over_line}}</span>
    <span>Recent hit rate</span><span>{{recent_rate}}</span>
    <span>Season hit rate</span><span>{{season_rate}}</span>
    <span>Recent average</span><span>{{recent_average}}</span>
    <span>Season average</span><span>{{season_average}}</span>
    <span>Average minutes</span><span>{{average_minutes}}</span>
    <span>Average margin when over</span><span>{{average_margin}}</span>
  </div>
  <p class="meta">Last games: {{recent_values}}</p>
  <div class="grid thresholds">
{{thresholds}}  </div>
</div>
"#;

const PREDICTION_CARD: &str = r#"<div class="card {{class}}">
  <h3>{{player}}</h3>
  <p><strong>{{stat}}</strong> over {{line}}</p>
  <div class="grid">
    <span>Probability</span><span>{{probability}}</span>
    <span>Model accuracy</span><span>{{accuracy}}</span>
  </div>
</div>
"#;

#[derive(Clone, Debug)]
pub struct HtmlPage {
    title: String,
    content: String,
}

impl HtmlPage {
    pub fn new(title: &str) -> Self {
        Self { title: s!(title), content: s!() }
    }

    /// The full document for everything rendered so far.
    pub fn finish(&self) -> String {
        fill(PAGE, &[("title", escape(&self.title)), ("content", self.content.clone())])
    }
}

impl Container for HtmlPage {
    fn clear(&mut self) {
        self.content.clear();
    }

    fn push(&mut self, card: Card) {
        let html = match &card {
            Card::Prop(c) => prop_card(c),
            Card::Prediction(c) => prediction_card(c),
        };
        self.content.push_str(&html);
    }

    fn notice(&mut self, message: &str) {
        self.content = format!("<p class=\"notice\">{}</p>\n", escape(message));
    }
}

fn threshold_rows(rows: &[ThresholdRow]) -> String {
    rows.iter()
        .map(|r| format!("    <span>Over {}</span><span>{}</span>\n", escape(&r.label), escape(&r.value)))
        .collect()
}

fn prop_card(c: &PropCard) -> String {
    let class = c.bucket.map(|b| b.css_class()).unwrap_or("");
    let badge = c.bucket.map(|b| b.label()).unwrap_or("");
    fill(
        PROP_CARD,
        &[
            ("class", s!(class)),
            ("badge", s!(badge)),
            ("player", escape(&c.player)),
            ("team", escape(&c.team)),
            ("position", escape(&c.position)),
            ("start", escape(&c.start)),
            ("stat", escape(&c.stat_type)),
            ("line", escape(&c.line)),
            ("over_line", escape(&c.over_line)),
            ("recent_rate", escape(&c.recent_rate)),
            ("season_rate", escape(&c.season_rate)),
            ("recent_average", escape(&c.recent_average)),
            ("recent_values", escape(&c.recent_values)),
            ("season_average", escape(&c.season_average)),
            ("average_minutes", escape(&c.average_minutes)),
            ("average_margin", escape(&c.average_margin)),
            ("thresholds", threshold_rows(&c.thresholds)),
        ],
    )
}

fn prediction_card(c: &PredictionCard) -> String {
    let accuracy = match &c.model {
        Some(m) => format!("{} ({})", c.accuracy, m),
        None => c.accuracy.clone(),
    };
    fill(
        PREDICTION_CARD,
        &[
            ("class", s!(c.confidence.map(|x| x.css_class()).unwrap_or(""))),
            ("player", escape(&c.player)),
            ("stat", escape(&c.stat_type)),
            ("line", escape(&c.line)),
            ("probability", escape(&c.probability)),
            ("accuracy", escape(&accuracy)),
        ],
    )
}
