//! setup-tailwind-rn - Add tailwind-rn to an existing React Native project

mod tailwind_rn;

use anyhow::{Context, Result};
use clap::Parser;
use tailwind_rn::TailwindRnConfig;

#[derive(Parser, Debug)]
#[command(name = "setup-tailwind-rn")]
#[command(about = "Set up tailwind-rn in the current React Native project")]
#[command(override_usage = "setup-tailwind-rn")]
#[command(version)]
pub struct Args {
    /// Extra arguments are accepted and ignored
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub ignored: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic and Ctrl+C
    setup_core::tui::install_terminal_guards();

    let _args = Args::parse();
    let project_dir =
        std::env::current_dir().context("Failed to determine the current directory")?;

    println!();
    setup_core::run(&TailwindRnConfig, &project_dir).await
}
