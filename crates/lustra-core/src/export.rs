//! Export surface: writing the PDF artifact and handing it to the desktop.
//!
//! Export is a capability chain. Saving to disk always works; opening and
//! sharing depend on helper binaries found on `PATH`. A capability whose
//! helper is missing fails with [`ReportError::ExportUnsupported`], but
//! once a helper is found its failure surfaces as-is instead of falling
//! through to the next candidate: a crashed viewer is a real error, not a
//! reason to silently try something else.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, info};
use tokio::task;

use crate::error::{ReportError, Result, ResultExt};

/// Helpers probed for the open capability, in preference order.
const OPEN_HELPERS: &[&str] = &["xdg-open", "open"];

/// Helpers probed for the share capability, in preference order.
/// Sharing puts the artifact path on the clipboard.
const SHARE_HELPERS: &[&str] = &["wl-copy", "xclip"];

/// Default artifact name for the current moment, e.g.
/// `informe-20260824-1530.pdf`.
pub fn default_report_path() -> PathBuf {
    let stamp = jiff::Zoned::now().strftime("%Y%m%d-%H%M");
    PathBuf::from(format!("informe-{stamp}.pdf"))
}

/// Writes the report bytes to `path`, creating parent directories.
///
/// File IO runs on the blocking pool.
pub async fn save_report(bytes: Vec<u8>, path: PathBuf) -> Result<PathBuf> {
    let written = task::spawn_blocking(move || -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ReportError::file_system(parent, e))?;
            }
        }
        std::fs::write(&path, &bytes).map_err(|e| ReportError::file_system(&path, e))?;
        Ok(path)
    })
    .await
    .with_context("Task join error")??;
    info!("Report written to {}", written.display());
    Ok(written)
}

/// Opens the artifact with the system viewer.
///
/// The viewer is spawned and left running; this returns once the helper
/// process started.
pub fn open_report(path: &Path) -> Result<()> {
    let helper = locate(OPEN_HELPERS).ok_or_else(|| ReportError::ExportUnsupported {
        action: "open".to_string(),
    })?;
    debug!("Opening {} with {helper}", path.display());
    Command::new(helper)
        .arg(path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ReportError::file_system(path, e))?;
    Ok(())
}

/// Shares the artifact by copying its absolute path to the clipboard.
///
/// Without a clipboard helper the share degrades to [`open_report`];
/// only a system with neither capability reports
/// [`ReportError::ExportUnsupported`].
pub fn share_report(path: &Path) -> Result<()> {
    let Some(helper) = locate(SHARE_HELPERS) else {
        debug!("No clipboard helper on PATH, degrading share to open");
        return open_report(path);
    };
    let absolute = path
        .canonicalize()
        .map_err(|e| ReportError::file_system(path, e))?;
    debug!("Sharing {} via {helper}", absolute.display());

    let status = match helper {
        "wl-copy" => Command::new(helper)
            .arg(&absolute)
            .status()
            .map_err(|e| ReportError::file_system(path, e))?,
        // xclip reads the payload from stdin
        _ => {
            let mut child = Command::new(helper)
                .args(["-selection", "clipboard"])
                .stdin(Stdio::piped())
                .spawn()
                .map_err(|e| ReportError::file_system(path, e))?;
            if let Some(stdin) = child.stdin.as_mut() {
                stdin
                    .write_all(absolute.as_os_str().as_encoded_bytes())
                    .map_err(|e| ReportError::file_system(path, e))?;
            }
            child.wait().map_err(|e| ReportError::file_system(path, e))?
        }
    };

    if !status.success() {
        return Err(ReportError::Configuration {
            message: format!("Share helper {helper} exited with {status}"),
        });
    }
    info!("Report path copied to clipboard via {helper}");
    Ok(())
}

/// Finds the first candidate helper present on `PATH`.
fn locate(candidates: &[&'static str]) -> Option<&'static str> {
    let path = std::env::var_os("PATH")?;
    locate_in(&path, candidates)
}

fn locate_in(path_var: &OsStr, candidates: &[&'static str]) -> Option<&'static str> {
    for name in candidates {
        for dir in std::env::split_paths(path_var) {
            if dir.join(name).is_file() {
                return Some(name);
            }
        }
    }
    None
}
