//! Command handlers wiring core operations to terminal output
//!
//! Each handler follows the same shape: convert CLI arguments to core
//! parameters (done by the caller via `From`), drive the session API, and
//! render the resulting Display wrapper as markdown.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{info, warn};
use lustra_core::{
    capture, export,
    params::{RunReport, SelectFlows},
    FlowCatalog, FlowList, QueueList, ReportOptions, ReportOutcome, Session, StepPrompt,
};
use tokio::task;

use crate::renderer::TerminalRenderer;

/// Photo file extensions accepted in batch mode.
const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// CLI command dispatcher holding shared context.
pub struct Cli {
    catalog_path: Option<PathBuf>,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(catalog_path: Option<PathBuf>, renderer: TerminalRenderer) -> Self {
        Self {
            catalog_path,
            renderer,
        }
    }

    async fn load_catalog(&self) -> Result<FlowCatalog> {
        let path = self.catalog_path.clone();
        task::spawn_blocking(move || FlowCatalog::resolve(path.as_deref()))
            .await
            .context("Catalog loading task failed")?
            .context("Failed to load flow catalog")
    }

    /// Lists the service flows the catalog offers.
    pub async fn list_flows(&self) -> Result<()> {
        let catalog = self.load_catalog().await?;
        self.renderer
            .render(&FlowList::with_title(catalog.flows(), "Servicios disponibles").to_string());
        Ok(())
    }

    /// Prints the capture checklist a selection would produce.
    pub async fn list_steps(&self, params: SelectFlows) -> Result<()> {
        let session = Session::builder()
            .with_catalog(self.load_catalog().await?)
            .with_selection(params.flow_ids())
            .build()
            .await
            .context("Failed to start session")?;
        self.renderer
            .render(&QueueList::with_title(session.queue(), "Lista de capturas").to_string());
        Ok(())
    }

    /// Documents a full service run from a directory of photos.
    pub async fn run(&self, params: RunReport) -> Result<()> {
        let mut session = Session::builder()
            .with_catalog(self.load_catalog().await?)
            .with_selection(params.selection.flow_ids())
            .build()
            .await
            .context("Failed to start session")?;

        let photos = collect_photos(&params.photos_dir)?;
        let total = session.queue().len();
        if photos.len() < total {
            bail!(
                "Not enough photos in {}: the checklist has {total} step(s), found {}",
                params.photos_dir.display(),
                photos.len()
            );
        }
        if photos.len() > total {
            warn!(
                "{} extra photo(s) in {} will be ignored",
                photos.len() - total,
                params.photos_dir.display()
            );
        }

        for path in photos.iter().take(total) {
            let step = session
                .current_step()
                .context("Checklist ended before the photo batch")?
                .clone();
            let prompt = StepPrompt::new(&step, session.progress());
            self.renderer.render(&format!(
                "{prompt}  [`{}`]\n",
                path.file_name().unwrap_or_default().to_string_lossy()
            ));

            let photo = capture::load_photo(path)
                .await
                .with_context(|| format!("Failed to ingest {}", path.display()))?;
            session
                .record_capture(photo)
                .context("Failed to record capture")?;
        }

        session.set_vehicle_info(params.vehicle_info());

        let report = session
            .compose_report(ReportOptions::default())
            .await
            .context("Failed to compose report")?;

        let target = params.output.unwrap_or_else(export::default_report_path);
        let bytes = report.bytes.clone();
        let written = export::save_report(bytes, target)
            .await
            .context("Failed to save report")?;

        self.renderer
            .render(&ReportOutcome::new(&report, &written).to_string());

        if params.open {
            export::open_report(&written).context("Failed to open report")?;
            info!("Report opened with the system viewer");
        }
        if params.share {
            export::share_report(&written).context("Failed to share report")?;
            self.renderer.render("Ruta copiada al portapapeles.\n");
        }
        Ok(())
    }
}

/// Collects the photo files of a directory in sorted filename order.
fn collect_photos(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read photo directory {}", dir.display()))?;

    let mut photos = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?
            .path();
        let is_photo = path.is_file()
            && path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| PHOTO_EXTENSIONS.contains(&e.to_lowercase().as_str()));
        if is_photo {
            photos.push(path);
        }
    }
    photos.sort();
    Ok(photos)
}
