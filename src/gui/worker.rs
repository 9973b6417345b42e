// src/gui/worker.rs
//
// One thread per dispatched request. The UI thread never blocks on the
// network; it polls the channel each frame.

use std::sync::mpsc::Sender;
use std::thread;

use eframe::egui;

use crate::fixtures::ScrapePayload;
use crate::net::{NetError, ScrapeClient};

pub struct ScrapeOutcome {
    pub generation: u64,
    pub result: Result<ScrapePayload, NetError>,
}

/// Fire the request and report back, tagged with the dispatch generation.
/// The send is unconditional: every dispatch produces exactly one outcome,
/// which is what re-enables the trigger on the UI side.
pub fn spawn(
    ctx: egui::Context,
    tx: Sender<ScrapeOutcome>,
    generation: u64,
    endpoint: String,
    season: String,
) {
    thread::spawn(move || {
        let result = ScrapeClient::new(&endpoint).and_then(|c| c.scrape(&season));

        if tx.send(ScrapeOutcome { generation, result }).is_err() {
            logd!("Worker: outcome gen={} dropped (app closed)", generation);
        }
        ctx.request_repaint();
    });
}
