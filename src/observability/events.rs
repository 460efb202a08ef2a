//! Observable events for quizdb
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in quizdb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded from the environment
    ConfigLoaded,
    /// Document store reachable
    StoreConnected,
    /// HTTP listener bound, ready for requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Listener closed
    ShutdownComplete,
    /// Startup aborted (FATAL)
    BootFailed,

    // Questions
    QuestionCreated,
    QuestionUpdated,
    QuestionDeleted,

    // Categories
    CategoryCreated,
    CategoryUpdated,
    CategoryDeleted,

    // Requests
    /// A request was answered with an error status
    RequestFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "QUIZDB_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreConnected => "STORE_CONNECTED",
            Event::Serving => "QUIZDB_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::BootFailed => "QUIZDB_STARTUP_FAILED",

            Event::QuestionCreated => "QUESTION_CREATED",
            Event::QuestionUpdated => "QUESTION_UPDATED",
            Event::QuestionDeleted => "QUESTION_DELETED",

            Event::CategoryCreated => "CATEGORY_CREATED",
            Event::CategoryUpdated => "CATEGORY_UPDATED",
            Event::CategoryDeleted => "CATEGORY_DELETED",

            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
