use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use wordtrack::{tracker, ReportMode, TrackerConfig};

#[derive(Parser)]
#[command(name = "wordtracker")]
#[command(about = "Index the words of a text file and report where they occur", long_about = None)]
struct Args {
    /// Text file to add to the index
    input: PathBuf,

    /// Report layout: by-file, by-line or by-occurrence (or -pf, -pl, -po)
    #[arg(allow_hyphen_values = true)]
    mode: String,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Snapshot file the index is kept in between runs
    #[arg(long, env = "WORDTRACKER_REPOSITORY", default_value = "repository.ser")]
    repository: PathBuf,

    /// Don't write ingested words back to the repository
    #[arg(long)]
    no_save: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so that the report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Reject a bad selector before anything is read or written.
    let mode: ReportMode = args
        .mode
        .parse()
        .context("usage: wordtracker <input> by-file|by-line|by-occurrence [-o <output>]")?;

    info!("Starting wordtracker v{}", wordtrack::VERSION);

    let config = TrackerConfig::default()
        .with_repository(args.repository)
        .with_persist(!args.no_save);

    let report = tracker::run(config, &args.input, mode.name(), args.output.as_deref())
        .with_context(|| format!("failed to index {}", args.input.display()))?;

    if args.output.is_none() {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", report)?;
        writeln!(stdout, "Not exporting to file")?;
    }

    Ok(())
}
