use std::process::ExitCode;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod cli;
mod config;
mod dups;
mod error;
mod runtime;
mod stats;
mod ui;

use cli::{CliArgs, Request};

fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init();
}

fn main() -> ExitCode {
    let request = Request::from(CliArgs::parse());
    init_logging();

    let settings = runtime::load_settings();
    match runtime::run(request, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:?}");
            eprintln!("tunestat: {err}");
            ExitCode::FAILURE
        }
    }
}
