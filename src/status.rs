// src/status.rs
//
// Status messaging used by both frontends. The kind is presentation only
// (GUI color, CLI prefix); nothing branches on it.

use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Loading,
    Success,
    Error,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            StatusKind::Info => "info",
            StatusKind::Loading => "loading",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        };
        f.write_str(tag)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn info<T: Into<String>>(text: T) -> Self {
        Self { kind: StatusKind::Info, text: text.into() }
    }
}

/// Where status updates land. Frontends bind this to their own surface so
/// the scrape flow never reaches into widgets directly.
pub trait StatusSink {
    fn set(&mut self, kind: StatusKind, text: String);
}

/// A no-op sink.
pub struct NullStatus;
impl StatusSink for NullStatus {
    fn set(&mut self, _kind: StatusKind, _text: String) {}
}

/// Shared status line; workers write, the UI thread reads every frame.
#[derive(Clone)]
pub struct SharedStatus(Arc<Mutex<StatusLine>>);

impl SharedStatus {
    pub fn new(initial: StatusLine) -> Self {
        Self(Arc::new(Mutex::new(initial)))
    }

    pub fn snapshot(&self) -> StatusLine {
        self.0.lock().unwrap().clone()
    }
}

impl StatusSink for SharedStatus {
    fn set(&mut self, kind: StatusKind, text: String) {
        *self.0.lock().unwrap() = StatusLine { kind, text };
    }
}
