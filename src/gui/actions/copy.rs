// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv, gui::app::App, status::StatusKind};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.table.is_empty() {
        app.set_status(StatusKind::Info, s!("Nothing to copy"));
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let txt = csv::to_export_string(
        &app.table.header_row(),
        &app.table.rows,
        export.include_headers,
        export.format.delim(),
    );

    logf!("Copy: rows={}", app.table.rows.len());

    ui_ctx.copy_text(txt);
    app.set_status(StatusKind::Info, s!("Copied to clipboard"));
}
