//! Configuration management for the chronos application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory alongside the task file. A missing configuration file is not an
//! error; the application runs on defaults until `chronos init` writes one.
//!
//! The only configurable module today is the reminder scheduler: how often
//! it polls the task store and how far ahead of a deadline it starts firing.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name within the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Reminder scheduler settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReminderConfig {
    /// Polling interval in seconds between task store scans.
    pub poll_interval: u64,

    /// Width of the reminder window in minutes. A task becomes
    /// reminder-eligible this many minutes before its due time.
    pub window_minutes: i64,
}

impl Default for ReminderConfig {
    /// Defaults match the original behavior: scan once a minute, start
    /// reminding 15 minutes before the deadline.
    fn default() -> Self {
        ReminderConfig {
            poll_interval: 60,
            window_minutes: 15,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<ReminderConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when none exists.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&config_path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Writes the configuration to the application data directory.
    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(config_path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive setup wizard for the reminder module.
    ///
    /// Prompts with the current values (or defaults) pre-filled, so running
    /// it again just confirms the existing configuration.
    pub fn init() -> Result<Self> {
        let mut config = Config::read()?;
        let current = config.reminder.clone().unwrap_or_default();

        let poll_interval: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Polling interval in seconds")
            .default(current.poll_interval)
            .interact_text()?;
        let window_minutes: i64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Reminder window in minutes before the due time")
            .default(current.window_minutes)
            .interact_text()?;

        config.reminder = Some(ReminderConfig {
            poll_interval,
            window_minutes,
        });
        Ok(config)
    }
}
