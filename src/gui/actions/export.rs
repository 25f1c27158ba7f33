// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    let page = app.current_page();
    let kind = page.kind();
    let n = page.cards(app).len();

    if n == 0 {
        app.status("Nothing to export");
        logd!("Export: Clicked, but there's nothing to export");
        return;
    }

    // Apply the text field; format still controls the extension.
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_dirty = false;
    }
    let path = app.state.options.export.out_path(kind);
    app.out_path_text = path.to_string_lossy().into_owned();

    let contents = super::current_export_string(app);
    match file::write_output(&path, &contents) {
        Ok(p) => {
            logf!("Export: page={:?} cards={} → {}", kind, n, p.display());
            app.status(format!("Exported {n} card(s) to {}", p.display()));
        }
        Err(e) => {
            loge!("Export: failed page={:?}: {}", kind, e);
            app.status(format!("Export failed: {e}"));
        }
    }
}
