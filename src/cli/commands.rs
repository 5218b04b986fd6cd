use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "td", about = concat!("[*] tido v", env!("CARGO_PKG_VERSION"), " - categorized todos with stats"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a .tido/ data directory here
    Init,
    /// Add a todo
    Add(AddArgs),
    /// List todos matching the current filters
    List,
    /// Toggle a todo's completion
    Done(IdArgs),
    /// Delete a todo
    Rm(IdArgs),
    /// Delete all completed todos
    Clear,
    /// Manage categories
    Cat(CatCmd),
    /// Set the status and category filters
    Filter(FilterArgs),
    /// Show completion stats for the filtered list
    Stats,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Todo text
    pub text: String,
    /// Category for the new todo
    #[arg(long, short, default_value = "Personal")]
    pub category: String,
}

#[derive(Args)]
pub struct IdArgs {
    /// Todo id, or any unique prefix of it
    pub id: String,
}

// ---------------------------------------------------------------------------
// Category subcommands
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct CatCmd {
    #[command(subcommand)]
    pub command: CatCommands,
}

#[derive(Subcommand)]
pub enum CatCommands {
    /// List categories
    List,
    /// Add a category
    Add { name: String },
    /// Delete a category (defaults are protected)
    Rm { name: String },
}

// ---------------------------------------------------------------------------
// Filter args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct FilterArgs {
    /// Status filter: all, active, or completed
    pub status: Option<String>,
    /// Category filter: a category name, or "All"
    #[arg(long, short)]
    pub category: Option<String>,
}
