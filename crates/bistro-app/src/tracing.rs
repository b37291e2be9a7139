//! Native log setup, on the web `eframe::WebLogger` is used instead

use std::path::PathBuf;

use anyhow::Context as _;
use bistro_shared::telemetry;

use crate::cli::Cli;

const APP_NAME: &str = "bistro_app";
const DEFAULT_FILTER: &str = "zbus=warn,info";

/// Where the traces ended up
#[derive(Debug)]
pub enum TraceTarget {
    File(PathBuf),
    Stdout,
}

/// Traces go to a file unless `--stdout` was passed or the file could not be
/// created
pub fn init(cli: &Cli) -> anyhow::Result<TraceTarget> {
    if !cli.is_to_std_out {
        match init_to_file() {
            Ok(path) => return Ok(TraceTarget::File(path)),
            // Fall through to stdout
            Err(e) => eprintln!("Failed to start logging to file: {e:#}"),
        }
    }
    tracing_subscriber::fmt()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to start tracing. Error: {e}"))?;
    Ok(TraceTarget::Stdout)
}

fn init_to_file() -> anyhow::Result<PathBuf> {
    let (file, path) = telemetry::create_trace_file(APP_NAME)?;
    let subscriber = telemetry::get_subscriber(APP_NAME.into(), DEFAULT_FILTER, file);
    telemetry::init_subscriber(subscriber).context("Failed to start tracing to file")?;
    Ok(path)
}
