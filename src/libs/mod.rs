//! Core library modules for the chronos application.
//!
//! ## Features
//!
//! - **Task Records**: Typed tasks with due dates, priorities, and completion state
//! - **Task Store**: Ordered in-memory collection with write-through JSON persistence
//! - **Reminder Scheduler**: Background polling loop emitting pre-deadline reminders
//! - **Configuration**: JSON settings with an interactive setup wizard
//! - **User Interface**: Console table rendering and centralized messaging

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod reminder;
pub mod store;
pub mod task;
pub mod view;
