//! Display implementation for chronos application messages.
//!
//! All user-facing text lives here, in one place, so wording stays
//! consistent across commands and the reminder surface.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskCompleted(title) => format!("Task '{}' completed", title),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::NoTasksFound => "No tasks yet. Add one with 'chronos add'".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),

            // === REMINDER MESSAGES ===
            Message::TaskReminder(title, due) => format!("Task due soon: {}\nDue at: {}", title, due),
            Message::WatcherStarted(secs) => format!("Reminder watcher started (polling every {}s)", secs),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down...".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down...".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down...".to_string(),
            Message::WatcherCtrlCListenFailed(e) => format!("Failed to listen for Ctrl+C: {}", e),
            Message::WatcherSignalHandlingNotSupported => "Signal handling not supported on this platform".to_string(),
            Message::SchedulerShuttingDown => "Stopping reminder scheduler".to_string(),
            Message::SchedulerExitedNormally => "Reminder scheduler exited".to_string(),
        };
        write!(f, "{}", text)
    }
}
