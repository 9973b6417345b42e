// src/gui/actions/export.rs
use crate::{file, gui::app::App, status::StatusKind};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    if app.table.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.set_status(StatusKind::Info, s!("Nothing to export"));
        return;
    }

    let headers = app.table.header_row();
    logf!(
        "Export: Begin rows={} format={:?}",
        app.table.rows.len(),
        app.state.options.export.format
    );

    let result = file::write_export_single(&app.state.options.export, &headers, &app.table.rows);

    match result {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            app.set_status(StatusKind::Success, format!("Exported {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.set_status(StatusKind::Error, format!("Export error: {e}"));
        }
    }
}
