//! Lustra CLI Application
//!
//! Command-line interface for the Lustra detailing documentation tool.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(catalog_file, renderer);

    info!("Lustra started");

    match command {
        Some(Steps(args)) => cli.list_steps(args.into()).await,
        Some(Run(args)) => cli.run(args.into()).await,
        Some(Flows) | None => cli.list_flows().await,
    }
}
