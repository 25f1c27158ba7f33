// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs

pub use copy::copy;
pub use export::export;

use crate::{csv, gui::app::App};

/// The current page's cards in the selected export format.
pub(super) fn current_export_string(app: &App) -> String {
    let page = app.current_page();
    let export = &app.state.options.export;
    csv::to_export_string(
        page.headers(),
        page.cards(app).cards(),
        export.include_headers,
        export.delim(),
    )
}
