use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use lustra_core::params::{RunReport, SelectFlows};

/// Main command-line interface for the Lustra detailing documentation tool
///
/// Lustra guides the photo documentation of vehicle detailing services: a
/// fixed checklist of BEFORE and CLEANING photos per selected service,
/// followed by the same BEFORE shots repeated as AFTER, and finally a PDF
/// report with side-by-side ANTES/DESPUÉS comparisons.
#[derive(Parser)]
#[command(version, about, name = "lustra")]
pub struct Args {
    /// Path to a catalog JSON file. Defaults to
    /// $XDG_CONFIG_HOME/lustra/catalog.json, falling back to the built-in
    /// catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Lustra CLI
///
/// - `flows`: list the service flows the catalog offers
/// - `steps`: preview the capture checklist for a selection
/// - `run`: document a service from a directory of photos and produce the
///   PDF report
#[derive(Subcommand)]
pub enum Commands {
    /// List available service flows
    #[command(aliases = ["f", "ls"])]
    Flows,
    /// Preview the capture checklist for selected flows
    #[command(alias = "s")]
    Steps(StepsArgs),
    /// Capture photos in checklist order and compose the PDF report
    #[command(alias = "r")]
    Run(RunArgs),
}

/// Preview the ordered capture checklist
///
/// CLI wrapper for SelectFlows that adds clap-specific argument handling.
/// The selection is validated and priority-sorted before the queue is
/// linearized, so the printed order is the capture order.
#[derive(ClapArgs)]
pub struct StepsArgs {
    /// Flow ids to select - comma-separated list
    #[arg(
        short,
        long,
        value_delimiter = ',',
        required = true,
        help = "Flow ids to select (comma-separated), e.g. interior,exterior_detailed"
    )]
    pub select: Vec<String>,
}

impl From<StepsArgs> for SelectFlows {
    fn from(val: StepsArgs) -> Self {
        SelectFlows { flows: val.select }
    }
}

/// Document a service run and compose the report
///
/// Photos are consumed from a directory in sorted filename order, one per
/// checklist step. The run fails if the directory holds fewer photos than
/// the checklist has steps; extra photos are ignored with a warning.
#[derive(ClapArgs)]
pub struct RunArgs {
    /// Flow ids to select - comma-separated list
    #[arg(
        short,
        long,
        value_delimiter = ',',
        required = true,
        help = "Flow ids to select (comma-separated), e.g. interior,exterior_detailed"
    )]
    pub select: Vec<String>,

    /// Directory holding the photos, consumed in sorted filename order
    pub photos_dir: PathBuf,

    /// Target path of the PDF report
    #[arg(short, long, help = "Output path; defaults to informe-<timestamp>.pdf")]
    pub output: Option<PathBuf>,

    /// License plate for the cover page
    #[arg(long, help = "License plate shown on the cover page")]
    pub plate: Option<String>,

    /// Vehicle model for the cover page
    #[arg(long, help = "Vehicle model shown on the cover page")]
    pub model: Option<String>,

    /// Open the report with the system viewer after writing it
    #[arg(long)]
    pub open: bool,

    /// Copy the report path to the clipboard after writing it
    #[arg(long)]
    pub share: bool,
}

impl From<RunArgs> for RunReport {
    /// Convert CLI arguments to the core parameter structure
    fn from(val: RunArgs) -> Self {
        RunReport {
            selection: SelectFlows { flows: val.select },
            photos_dir: val.photos_dir,
            output: val.output,
            plate: val.plate,
            model: val.model,
            open: val.open,
            share: val.share,
        }
    }
}
