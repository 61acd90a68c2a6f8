//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::authoring::RecordKind;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  problemdown render problem.md                Normalize escapes and code fences
  problemdown highlight -l python sol.py       Highlight a solution as HTML
  problemdown copy --clipboard sol.py          Copy a solution in paste-ready form
  problemdown problem content/problems/tutorial/output/hello.mdx
  problemdown category content/categories/output.mdc
  problemdown sql problem data/problems/tutorial/output/hello.json
  problemdown process-all problem content/problems
  problemdown search \"hello\"
  problemdown completions bash

ENVIRONMENT:
  PROBLEMDOWN_DATA_DIR   Output/search directory for records (default: data)
  PROBLEMDOWN_THEME      syntect theme for highlighting (default: InspiredGitHub)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Content toolchain for a programming-problem catalog",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the data directory (PROBLEMDOWN_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize authored content (escapes and code fences) for a Markdown renderer
    Render {
        /// Content file, or '-' for stdin
        input: String,
    },
    /// Highlight a reference solution line by line as an HTML fragment
    Highlight {
        /// Solution file, or '-' for stdin
        input: String,
        /// Solution language (python, cpp, c)
        #[arg(short, long)]
        language: String,
        /// Print per-line metadata as JSON instead of the HTML fragment
        #[arg(long)]
        json: bool,
    },
    /// Print a reference solution in copy-ready form
    Copy {
        /// Solution file, or '-' for stdin
        input: String,
        /// Write to the system clipboard instead of stdout
        #[arg(long)]
        clipboard: bool,
    },
    /// Convert a problem MDX file to JSON and SQL in the data directory
    Problem {
        /// Path to the .mdx file
        file: PathBuf,
    },
    /// Convert a category MDC file to JSON and SQL in the data directory
    Category {
        /// Path to the .mdc file
        file: PathBuf,
    },
    /// Generate SQL from a record JSON file (written next to it as .sql)
    Sql {
        #[arg(value_enum)]
        kind: RecordKind,
        /// Path to the .json record
        file: PathBuf,
    },
    /// Convert every MDX/MDC file under a directory; failures do not stop the run
    ProcessAll {
        #[arg(value_enum)]
        kind: RecordKind,
        /// Content directory to walk
        dir: PathBuf,
    },
    /// Search converted problems by title
    Search {
        /// Case-insensitive text to look for in titles
        query: String,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
