use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task ID as shown by 'chronos list'.
    #[arg(required = true)]
    id: usize,
}

pub fn cmd(args: CompleteArgs) -> Result<()> {
    let mut store = TaskStore::new()?;
    match store.complete(args.id) {
        Ok(task) => {
            msg_success!(Message::TaskCompleted(task.title));
            Ok(())
        }
        Err(StoreError::TaskNotFound(id)) => {
            msg_bail_anyhow!(Message::TaskNotFoundWithId(id))
        }
        Err(e) => Err(e.into()),
    }
}
