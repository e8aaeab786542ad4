//! Creates a new task and persists it immediately.
//!
//! All boundary validation happens here: the due date string is parsed
//! before a record is ever constructed, and an empty title is rejected by
//! the record constructor. The store is only touched with valid data.

use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::task::{parse_datetime, Priority, Task};
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title. Prompted for when omitted.
    title: Option<String>,

    /// Free-form description.
    #[arg(short, long, default_value = "")]
    description: String,

    /// Due date in YYYY-MM-DD HH:MM format.
    #[arg(long)]
    due: Option<String>,

    /// Task priority.
    #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
    priority: Priority,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let title = match args.title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Task title")
            .interact_text()?,
    };

    // Reject a malformed date before any record exists; an empty --due
    // would otherwise silently become "no deadline".
    let due_date = args.due.as_deref().map(parse_datetime).transpose()?;

    let task = Task::new(&title, &args.description, due_date, args.priority)?;
    let mut store = TaskStore::new()?;
    store.add(task)?;

    msg_success!(Message::TaskCreated(title));
    Ok(())
}
