// src/gui/actions/copy.rs
use eframe::egui;
use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let page = app.current_page();
    let n = page.cards(app).len();

    if n == 0 {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = super::current_export_string(app);
    logf!("Copy: page={:?}, cards={}", page.kind(), n);

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {n} card(s) to clipboard"));
}
