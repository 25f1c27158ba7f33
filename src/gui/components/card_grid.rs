// src/gui/components/card_grid.rs
//
// Draws the current page's CardList. Purely a view: the list was filled by
// the last render pass, so a notice (load failure) replaces everything.

use eframe::egui::{self, Align, Color32, Layout, RichText, Stroke};

use crate::{
    core::{Bucket, Confidence},
    gui::app::App,
    render::{Card, PredictionCard, PropCard, ThresholdRow},
};

const HIGH: Color32 = Color32::from_rgb(0x1E, 0x8E, 0x3E);
const MEDIUM: Color32 = Color32::from_rgb(0xF9, 0xAB, 0x00);
const LOW: Color32 = Color32::from_rgb(0xD9, 0x30, 0x25);

fn bucket_color(b: Bucket) -> Color32 {
    match b {
        Bucket::High => HIGH,
        Bucket::Medium => MEDIUM,
        Bucket::Low => LOW,
    }
}

fn confidence_color(c: Confidence) -> Color32 {
    match c {
        Confidence::High => HIGH,
        Confidence::Low => LOW,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let page = app.current_page();
    let list = page.cards(app);

    if let Some(msg) = list.notice_text() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new(msg).color(LOW).size(16.0));
        });
        return;
    }

    if page.is_loading(app) {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("Loading…").weak());
        });
        return;
    }

    if list.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("No cards match the current filter").weak());
        });
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt(("cards", page.kind()))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (idx, card) in list.cards().iter().enumerate() {
                match card {
                    Card::Prop(c) => prop_card(ui, idx, c),
                    Card::Prediction(c) => prediction_card(ui, c),
                }
                ui.add_space(6.0);
            }
        });
}

fn card_frame(ui: &mut egui::Ui, accent: Option<Color32>, body: impl FnOnce(&mut egui::Ui)) {
    let stroke = match accent {
        Some(c) => Stroke::new(2.0, c),
        None => ui.visuals().widgets.noninteractive.bg_stroke,
    };
    egui::Frame::group(ui.style()).stroke(stroke).show(ui, |ui| {
        ui.set_width(ui.available_width());
        body(ui);
    });
}

fn title_row(ui: &mut egui::Ui, title: &str, badge: Option<(&str, Color32)>) {
    ui.horizontal(|ui| {
        ui.heading(title);
        if let Some((text, color)) = badge {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(text).color(color).strong());
            });
        }
    });
}

fn stat_grid(ui: &mut egui::Ui, id: impl std::hash::Hash, rows: &[(&str, &str)]) {
    egui::Grid::new(id).num_columns(2).spacing([24.0, 2.0]).show(ui, |ui| {
        for (label, value) in rows {
            ui.label(*label);
            ui.label(RichText::new(*value).strong());
            ui.end_row();
        }
    });
}

fn threshold_grid(ui: &mut egui::Ui, id: impl std::hash::Hash, rows: &[ThresholdRow]) {
    egui::Grid::new(id).num_columns(2).spacing([24.0, 2.0]).striped(true).show(ui, |ui| {
        for r in rows {
            ui.label(format!("Over {}", r.label));
            ui.label(r.value.as_str());
            ui.end_row();
        }
    });
}

fn prop_card(ui: &mut egui::Ui, idx: usize, c: &PropCard) {
    let accent = c.bucket.map(bucket_color);
    card_frame(ui, accent, |ui| {
        title_row(ui, c.player.as_str(), c.bucket.map(|b| (b.label(), bucket_color(b))));
        ui.label(RichText::new(format!("{} · {} · {}", c.team, c.position, c.start)).weak());
        ui.label(RichText::new(format!("{} over {}", c.stat_type, c.line)).strong());
        ui.add_space(4.0);

        stat_grid(ui, ("prop_stats", idx), &[
            ("Probability over line", c.over_line.as_str()),
            ("Recent hit rate", c.recent_rate.as_str()),
            ("Season hit rate", c.season_rate.as_str()),
            ("Recent average", c.recent_average.as_str()),
            ("Season average", c.season_average.as_str()),
            ("Average minutes", c.average_minutes.as_str()),
            ("Average margin when over", c.average_margin.as_str()),
        ]);
        ui.label(RichText::new(format!("Last games: {}", c.recent_values)).weak());

        if !c.thresholds.is_empty() {
            ui.add_space(4.0);
            threshold_grid(ui, ("prop_thresholds", idx), &c.thresholds);
        }

        if !c.distribution.is_empty() {
            egui::CollapsingHeader::new("Distribution")
                .id_salt(("prop_distribution", idx))
                .show(ui, |ui| threshold_grid(ui, ("prop_distribution_grid", idx), &c.distribution));
        }
    });
}

fn prediction_card(ui: &mut egui::Ui, c: &PredictionCard) {
    let accent = c.confidence.map(confidence_color);
    card_frame(ui, accent, |ui| {
        title_row(ui, c.player.as_str(), c.confidence.map(|x| (x.label(), confidence_color(x))));
        ui.label(RichText::new(format!("{} over {}", c.stat_type, c.line)).strong());
        let tone = accent.unwrap_or(ui.visuals().text_color());
        ui.horizontal(|ui| {
            ui.label("Probability");
            ui.label(RichText::new(c.probability.as_str()).strong().color(tone));
            ui.separator();
            ui.label("Model accuracy");
            ui.label(RichText::new(c.accuracy.as_str()).strong());
            if let Some(m) = &c.model {
                ui.label(RichText::new(format!("({m})")).weak());
            }
        });
    });
}
