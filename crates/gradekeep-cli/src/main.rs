//! gradekeep CLI — the interactive student grade tracker.

use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;

use gradekeep_core::Store;
use gradekeep_persist::FlatFileAdapter;

mod app;
mod config;
mod flows;

use app::App;

/// The tool is menu-driven; clap only provides `--help` and `--version`.
#[derive(Parser)]
#[command(name = "gradekeep", version, about = "Interactive student grade tracker")]
struct Cli {}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradekeep=info".parse().unwrap()),
        )
        .init();

    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = config::load_config()?;
    let adapter = FlatFileAdapter::new(&config.records_file);

    // Load failures are recoverable: report, start with an empty roster,
    // and keep going. The file catches up on the next successful write.
    let store = match adapter.load() {
        Ok(outcome) => {
            if outcome.skipped > 0 {
                println!(
                    "Skipped {} malformed record(s) while loading.",
                    outcome.skipped
                );
            }
            Store::from_parts(outcome.students, outcome.max_numeric_id)
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not load records file");
            println!("Error reading student records.\n");
            Store::new()
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(store, adapter, stdin.lock(), stdout.lock());
    app.run()?;

    Ok(())
}
