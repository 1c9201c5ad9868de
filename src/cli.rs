use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start with an empty board instead of the sample tasks
    #[arg(long)]
    pub empty: bool,

    /// Start with a category filter already active (school, health or personal)
    #[arg(long, value_name = "CATEGORY")]
    pub filter: Option<String>,

    /// Prefill for the minutes field of the add form
    #[arg(long, value_name = "MINUTES", default_value_t = 25)]
    pub minutes: u32,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the task board (default when no command is given)
    Tui,
    /// Generate shell completions
    Completions {
        #[arg(value_name = "SHELL")]
        shell: String,
    },
}
