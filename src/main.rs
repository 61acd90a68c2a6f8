//! # problemdown
//!
//! Content toolchain for a programming-problem catalog: normalizes authored
//! Markdown, highlights reference solutions, and converts MDX/MDC sources into
//! JSON records and SQL seed statements.

mod authoring;
mod cli;
mod core;
mod run;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);
    log::debug!("{} {}", core::app::NAME, core::app::VERSION);

    if let Commands::Completions { shell } = args.command {
        let mut cmd = Args::command();
        cli::generate(shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
        return;
    }

    // Print user-friendly message; exit uses Display not Debug
    let mut config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }

    if let Err(e) = run::execute(&args, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
