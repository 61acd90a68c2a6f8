//! Subcommand handlers: logger init, reading input, dispatching to the library.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::authoring::{RecordKind, batch, catalog, sql};
use crate::cli::{Args, Commands};
use crate::core::config::Config;
use crate::core::content::normalize_content_or_raw;
use crate::core::solution::{copy_format, highlight_solution, syntax::SyntectHighlighter};

type RunResult = Result<(), Box<dyn std::error::Error>>;

/// Initialize env_logger on stderr so stdout stays clean for piped output.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Read a whole input file, or stdin when `input` is `-`.
fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(input)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", input, e)))
    }
}

fn write_stdout(text: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()
}

/// Run one subcommand. Completions are handled in `main` before config loads.
pub fn execute(args: &Args, config: &Config) -> RunResult {
    match &args.command {
        Commands::Render { input } => {
            let raw = read_input(input)?;
            write_stdout(&normalize_content_or_raw(&raw))?;
        }
        Commands::Highlight {
            input,
            language,
            json,
        } => {
            let code = read_input(input)?;
            let highlighter = SyntectHighlighter::new(&config.theme)
                .ok_or_else(|| format!("unknown theme {:?}", config.theme))?;
            let highlighted = highlight_solution(&code, language, &highlighter);
            log::info!(
                "Highlighted {} line(s), {} comment(s)",
                highlighted.lines.len(),
                highlighted.lines.iter().filter(|l| l.is_comment()).count()
            );
            if *json {
                println!("{}", serde_json::to_string_pretty(&highlighted)?);
            } else {
                println!("{}", highlighted.html);
            }
        }
        Commands::Copy { input, clipboard } => {
            let code = read_input(input)?;
            let text = copy_format(&code);
            if *clipboard {
                let mut board = arboard::Clipboard::new()?;
                board.set_text(text)?;
                log::info!("Copied solution to clipboard");
            } else {
                write_stdout(&text)?;
            }
        }
        Commands::Problem { file } => convert_one(RecordKind::Problem, file, config)?,
        Commands::Category { file } => convert_one(RecordKind::Category, file, config)?,
        Commands::Sql { kind, file } => {
            let json = fs::read_to_string(file)
                .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", file.display(), e)))?;
            let statements = sql::sql_from_json(&json, *kind)?;
            let out = file.with_extension("sql");
            fs::write(&out, statements)?;
            println!("{}", out.display());
        }
        Commands::ProcessAll { kind, dir } => process_all(*kind, dir, config)?,
        Commands::Search { query } => {
            let problems = catalog::load_problems(&config.data_dir);
            let hits = catalog::search_titles(&problems, query);
            if hits.is_empty() {
                eprintln!("No problems match {:?}", query);
            }
            for p in hits {
                println!("{}/{}/{}\t{}", p.difficulty, p.category, p.id, p.title);
            }
        }
        Commands::Completions { .. } => {}
    }
    Ok(())
}

fn convert_one(kind: RecordKind, file: &Path, config: &Config) -> RunResult {
    let converted = batch::convert_file(kind, file, &config.data_dir)?;
    println!("{}", converted.json.display());
    println!("{}", converted.sql.display());
    Ok(())
}

/// Convert a whole tree; exits non-zero after the run if any file failed.
fn process_all(kind: RecordKind, dir: &Path, config: &Config) -> RunResult {
    let report = batch::process_all(kind, dir, &config.data_dir)?;
    for converted in &report.converted {
        println!("ok\t{}", converted.source.display());
    }
    for (source, err) in &report.failed {
        println!("failed\t{}\t{}", source.display(), err);
    }
    eprintln!(
        "{} of {} file(s) converted",
        report.converted.len(),
        report.total()
    );
    if !report.failed.is_empty() {
        return Err(format!("{} file(s) failed to convert", report.failed.len()).into());
    }
    Ok(())
}
