use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use post_stats::{
    config::{DEFAULT_INPUT_PATH, DEFAULT_SEARCH_WORD},
    MalformedLines, RunConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the line-delimited JSON posts
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Word to search for in post titles
    #[arg(long, default_value = DEFAULT_SEARCH_WORD)]
    word: String,

    /// Skips malformed lines instead of aborting
    #[arg(long, default_value = "false")]
    skip_malformed: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = RunConfig {
        word: args.word,
        malformed: if args.skip_malformed {
            MalformedLines::Skip
        } else {
            MalformedLines::Abort
        },
    };

    match post_stats::run_with(&args.input, &config) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
