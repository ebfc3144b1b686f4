use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pk", about = concat!("[|] plank v", env!("CARGO_PKG_VERSION"), " - a kanban board for the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read a different config file (default: ./plank.toml)
    #[arg(short = 'C', long = "config", global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List columns and their tasks
    List(ListArgs),
    /// Validate board integrity
    Check,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only this column
    pub column: Option<String>,
    /// Filter by priority (low, medium, high, urgent)
    #[arg(long)]
    pub priority: Option<String>,
}
