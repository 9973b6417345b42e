// src/gui/app.rs
use std::error::Error;
use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui;

use crate::config::consts::MSG_READY;
use crate::config::state::AppState;
use crate::fixtures::FixtureTable;
use crate::status::{SharedStatus, StatusKind, StatusLine, StatusSink};

use super::{components, worker::ScrapeOutcome};

pub fn run(mut options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let state = AppState::default();

    let size = [state.gui.window_w as f32, state.gui.window_h as f32];
    let viewport = std::mem::take(&mut options.viewport);
    options.viewport = viewport.with_inner_size(size);

    eframe::run_native(
        "Fixture Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // current render cycle; replaced wholesale by every outcome
    pub table: FixtureTable,

    // status line (workers hold a handle; UI reads a snapshot per frame)
    pub status: SharedStatus,
    pub running: bool,

    // tag of the latest dispatched request; older outcomes are discarded
    pub generation: u64,

    outcome_tx: Sender<ScrapeOutcome>,
    outcome_rx: Receiver<ScrapeOutcome>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel();

        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        logf!("Init: endpoint={}", state.options.scrape.endpoint);

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            table: FixtureTable::default(),
            status: SharedStatus::new(StatusLine::info(MSG_READY)),
            running: false,
            generation: 0,
            outcome_tx,
            outcome_rx,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn set_status<T: Into<String>>(&mut self, kind: StatusKind, msg: T) {
        self.status.set(kind, msg.into());
    }

    #[inline]
    pub fn outcome_sender(&self) -> Sender<ScrapeOutcome> {
        self.outcome_tx.clone()
    }

    /// Drain finished requests. Only the matching generation may touch the
    /// table; the trigger re-enables on success and failure alike.
    fn poll_outcomes(&mut self) {
        while let Ok(out) = self.outcome_rx.try_recv() {
            if out.generation != self.generation {
                logd!(
                    "Scrape: Stale outcome gen={} (current={}), discarded",
                    out.generation, self.generation
                );
                continue;
            }

            self.running = false;

            match out.result {
                Ok(payload) => {
                    let n = payload.fixtures.len();
                    logf!("Scrape: OK season={:?} fixtures={}", payload.season, n);
                    self.table = FixtureTable::from_fixtures(&payload.fixtures);
                    self.set_status(
                        StatusKind::Success,
                        format!("Fetched {} fixtures for {}.", n, payload.season),
                    );
                }
                Err(e) => {
                    loge!("Scrape: Error: {}", e);
                    self.table = FixtureTable::no_data();
                    self.set_status(StatusKind::Error, e.to_string());
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_outcomes();

        egui::CentralPanel::default().show(ctx, |ui| {
            components::scrape_bar::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixture;
    use crate::net::NetError;
    use crate::fixtures::ScrapePayload;

    fn payload(season: &str, fixtures: Vec<Fixture>) -> ScrapePayload {
        ScrapePayload { season: s!(season), fixtures }
    }

    #[test]
    fn outcome_reenables_trigger_on_success_and_failure() {
        let mut app = App::new(AppState::default());

        app.running = true;
        app.generation = 1;
        app.outcome_tx
            .send(ScrapeOutcome {
                generation: 1,
                result: Ok(payload("2023-2024", vec![Fixture::default()])),
            })
            .unwrap();
        app.poll_outcomes();

        assert!(!app.running);
        assert_eq!(app.table.rows.len(), 1);
        let line = app.status.snapshot();
        assert_eq!(line.kind, StatusKind::Success);
        assert_eq!(line.text, "Fetched 1 fixtures for 2023-2024.");

        app.running = true;
        app.generation = 2;
        app.outcome_tx
            .send(ScrapeOutcome {
                generation: 2,
                result: Err(NetError::Scrape { status: 400, message: s!("X") }),
            })
            .unwrap();
        app.poll_outcomes();

        assert!(!app.running);
        assert!(app.table.rows.is_empty());
        assert_eq!(app.table.placeholder, Some("No data available."));
        let line = app.status.snapshot();
        assert_eq!(line.kind, StatusKind::Error);
        assert_eq!(line.text, "X");
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut app = App::new(AppState::default());

        app.running = true;
        app.generation = 3;
        app.outcome_tx
            .send(ScrapeOutcome {
                generation: 2,
                result: Ok(payload("old", Vec::new())),
            })
            .unwrap();
        app.poll_outcomes();

        // a stale outcome may not touch the table or re-enable the trigger
        assert!(app.running);
        assert!(app.table.rows.is_empty());
        assert_eq!(app.table.placeholder, None);
    }
}
