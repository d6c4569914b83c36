//! # smarthouse
//!
//! Remote control demo.
//!
//! Composition root that wires the virtual devices to a remote control and
//! runs the demo scenario.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise `tracing` output
//! - Build the virtual devices, the commands and the remote control
//! - Print the final device snapshots as JSON lines
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No command logic belongs here.

mod config;
mod demo;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    tracing::info!(
        slots = config.remote.slot_count,
        macro_undo_order = %config.remote.macro_undo_order,
        "smarthouse starting"
    );

    let outcome = demo::run(&config.remote).context("demo scenario failed")?;

    tracing::info!(remaining = outcome.history.len(), "history after scenario");
    for snapshot in outcome.home.snapshots() {
        println!("{}", serde_json::to_string(&snapshot)?);
    }

    Ok(())
}
