// src/gui/components/scrape_bar.rs
//
// Season input + SCRAPE trigger + status line. Enter in the field and a
// button click share one code path; both are ignored while a request runs.

use eframe::egui::{self, widgets::Spinner, RichText};

use crate::gui::{actions, app::App};
use crate::status::StatusKind;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();

    ui.horizontal(|ui| {
        ui.label("Season:");

        let field = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.season)
                .hint_text("2023-2024")
                .desired_width(110.0),
        );
        let entered = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let button = ui.add_enabled(
            !app.running,
            egui::Button::new(
                RichText::new("SCRAPE")
                    .color(black)
                    .strong())
                .fill(red),
        );

        if (button.clicked() || entered) && !app.running {
            actions::scrape(app, &ctx);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        let line = app.status.snapshot();
        ui.label(RichText::new(line.text).color(status_color(ui, line.kind)));
    });
}

fn status_color(ui: &egui::Ui, kind: StatusKind) -> egui::Color32 {
    // Colors matched to the scrape page CSS: loading yellow ≈ #F0D23C,
    // error red ≈ #DC6149, success green ≈ #5CC864.
    match kind {
        StatusKind::Info => ui.visuals().text_color(),
        StatusKind::Loading => egui::Color32::from_rgb(0xF0, 0xD2, 0x3C),
        StatusKind::Success => egui::Color32::from_rgb(0x5C, 0xC8, 0x64),
        StatusKind::Error => egui::Color32::from_rgb(0xDC, 0x61, 0x49),
    }
}
