// src/gui/components/data_table.rs
//
// Draws the fixtures table. Purely a view; the rows live in App.table and
// are replaced wholesale by each scrape outcome.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::fixtures::COLUMNS;
use crate::gui::app::App;

// Round and Score read better centered.
const CENTERED: [bool; 6] = [false, true, false, false, true, false];
const WIDTHS: [f32; 6] = [90.0, 50.0, 170.0, 170.0, 60.0, 200.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let avail_h = ui.available_height();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(avail_h);

    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    let rows = &app.table.rows;

    table
        .header(24.0, |mut header| {
            for (ci, title) in COLUMNS.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let label = egui::Label::new(RichText::new(*title).strong()).selectable(false);
                    if CENTERED[ci] {
                        ui.centered_and_justified(|ui| { ui.add(label); });
                    } else {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.add(label); });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let row_idx = row.index();
                if let Some(data) = rows.get(row_idx) {
                    for ci in 0..COLUMNS.len() {
                        let cell = data.get(ci);
                        row.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            if let Some(cell) = cell {
                                if CENTERED[ci] {
                                    ui.centered_and_justified(|ui| { ui.label(cell); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                                }
                            }
                        });
                    }
                }
            });
        });

    // Placeholder line sits under the header where the rows would be.
    if let Some(text) = app.table.placeholder {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(text).italics().weak());
        });
    }
}
