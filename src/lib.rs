//! # Chronos - Time Management System
//!
//! A command-line utility for tracking personal tasks with due dates,
//! priorities, and timely reminders before deadlines.
//!
//! ## Features
//!
//! - **Task Management**: Create, list, and complete tasks with priorities
//! - **Due Dates**: Minute-precision deadlines with boundary validation
//! - **Reminders**: Background scheduler that alerts inside the 15-minute
//!   window before each deadline
//! - **Durable Storage**: Write-through JSON persistence in the platform
//!   application data directory
//! - **Configuration**: Adjustable polling interval and reminder window
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chronos::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
