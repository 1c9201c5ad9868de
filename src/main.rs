mod cli;
mod input;
mod models;
mod store;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use models::Category;
use store::TaskStore;
use ui::run_tui;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut store = if cli.empty {
        TaskStore::new()
    } else {
        TaskStore::with_sample_tasks()
    };

    if let Some(name) = cli.filter.as_deref() {
        match Category::from_name(name) {
            Some(category) => store.set_filter(Some(category)),
            None => {
                println!(
                    "Unknown category: {}. Expected school, health or personal.",
                    name
                );
                return Ok(());
            }
        }
    }

    match cli.command {
        Some(Commands::Completions { shell }) => {
            use clap_complete::{generate, Shell};
            let shell = shell.to_lowercase();
            let shell_enum = match shell.as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "elvish" => Shell::Elvish,
                "powershell" => Shell::PowerShell,
                _ => {
                    println!("Unsupported shell: {}", shell);
                    return Ok(());
                }
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "sprout", &mut std::io::stdout());
        }
        Some(Commands::Tui) | None => {
            run_tui(store, cli.minutes)?;
        }
    }

    Ok(())
}
