// src/gui/components/action_bar.rs

use eframe::egui::{self, widgets::Spinner};
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let kind = app.current_page_kind();
    let page = app.current_page();

    // --- Format + Include headers ---
    {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, ExportFormat::Tsv, "TSV");
            ui.selectable_value(&mut fmt, ExportFormat::Csv, "CSV");

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if fmt != prev_fmt {
            export.format = fmt;
            logf!("UI: Export format → {:?}", export.format);

            // Keep the field in sync while the user hasn't typed in it.
            if !app.out_path_dirty {
                app.out_path_text = export.out_path(kind).to_string_lossy().into_owned();
                logd!("UI: out_path_text refreshed to match format");
            }
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // Actions: Copy / Export
    ui.horizontal(|ui| {
        let has_cards = !page.cards(app).is_empty();

        if ui.add_enabled(has_cards, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.add_enabled(has_cards, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }

        if page.is_loading(app) {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status.as_str());
    });
}
