//! Assemble Sample Application Entry Point
//!
//! Joins text files through one forked task. Exits with a failure status
//! when the task fails.

use std::path::PathBuf;
use std::process::ExitCode;

use assemble::{Assembly, assemble};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Join text files, in order, into a single output file.
#[derive(Debug, Parser)]
#[command(name = "assemble", version, about)]
struct Arguments {
    /// Files to join, in order.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Destination file.
    #[arg(short, long)]
    output: PathBuf,

    /// Text placed between two parts.
    #[arg(short, long, default_value = "\n")]
    separator: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,assemble=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let arguments = Arguments::parse();
    let task = assemble(Assembly {
        inputs: arguments.inputs,
        output: arguments.output,
        separator: arguments.separator,
    });

    match task.await {
        Ok(summary) => {
            tracing::info!(parts = summary.parts, bytes = summary.bytes, "assembly finished");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("assembly failed: {error}");
            ExitCode::FAILURE
        }
    }
}
