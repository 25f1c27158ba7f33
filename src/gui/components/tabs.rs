// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself. Both boards
// load at startup, so a switch only changes which slot is drawn. The
// output field follows the page while it still shows the previous page's
// default path.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pages = router::all_pages();
        let cur = app.current_index();

        for (idx, page) in pages.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                let prev = app.current_page_kind();
                app.set_current_index(idx);
                let new_kind = page.kind();
                logf!("UI: Tab switch {:?} → {:?}", prev, new_kind);

                let export = &app.state.options.export;
                let prev_default = export.out_path(prev).to_string_lossy().into_owned();
                if !app.out_path_dirty || app.out_path_text == prev_default {
                    app.out_path_text = export.out_path(new_kind).to_string_lossy().into_owned();
                    app.out_path_dirty = false;
                }
            }
        }
    });
}
