pub mod add;
pub mod complete;
pub mod init;
pub mod list;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List all tasks")]
    List,
    #[command(about = "Mark a task as completed")]
    Complete(complete::CompleteArgs),
    #[command(about = "Run the reminder scheduler in the foreground")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Add(args) => add::cmd(args),
            Commands::List => list::cmd(),
            Commands::Complete(args) => complete::cmd(args),
            Commands::Watch => watch::cmd().await,
        }
    }
}
