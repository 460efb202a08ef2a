//! Observability for quizdb
//!
//! Structured JSON logging and typed lifecycle events.
//!
//! # Usage
//!
//! ```ignore
//! use quizdb::observability::{log_event_with_fields, Event, Logger};
//!
//! log_event_with_fields(Event::Serving, &[("addr", "0.0.0.0:8000")]);
//! Logger::warn("REQUEST_FAILED", &[("status", "404")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
