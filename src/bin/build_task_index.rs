//! Build a consolidated JSON/CSV index of task exports.
//!
//! Walks an export directory, extracts task metadata from every `*.html`
//! file, and writes `data/tasks.json` (and optionally a CSV).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use task_index::{build_index, indexer, Error, Options, DEFAULT_OUTPUT_JSON};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "build-task-index")]
#[command(about = "Build a consolidated task index from HTML exports.", long_about = None)]
struct Cli {
    /// Directory containing the extracted task export
    #[arg(default_value = ".")]
    export_dir: PathBuf,

    /// Path to write the consolidated JSON file
    #[arg(long, default_value = DEFAULT_OUTPUT_JSON)]
    output_json: PathBuf,

    /// Optional path to write a CSV version of the index
    #[arg(long)]
    output_csv: Option<PathBuf>,

    /// Log per-file extraction details
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let export_dir = indexer::resolve_dir(&cli.export_dir);
    let options = Options {
        export_dir: export_dir.clone(),
        output_json: cli.output_json,
        output_csv: cli.output_csv,
    };

    let records = build_index(&options)?;
    println!("Indexed {} task(s) from {}", records.len(), export_dir.display());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<Error>() {
                Some(Error::ExportDirNotFound(_)) => eprintln!("{err}"),
                _ => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
