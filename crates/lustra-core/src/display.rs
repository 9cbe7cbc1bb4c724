//! Display wrapper types for formatting different contexts.
//!
//! This module provides wrapper types that implement Display for catalog
//! listings, queue listings, capture prompts, and report outcomes, keeping
//! presentation logic out of the domain models.
//!
//! # Architecture: Display Wrapper Pattern
//!
//! Instead of implementing Display directly on domain models, specialized
//! wrapper types format the same data differently depending on context:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrapper │    │   Formatted     │
//! │ (Flow, Queue)   │───▶│    Types        │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Wrapper Types
//!
//! - [`FlowList`]: Formats the catalog's flows with optional title
//! - [`QueueList`]: Formats a capture queue grouped by flow and phase
//! - [`StepPrompt`]: Formats the current step as an operator prompt
//! - [`ReportOutcome`]: Formats a composed report with its accounting
//!
//! All formatters produce markdown for rich terminal display.
//!
//! # Examples
//!
//! ```rust
//! use lustra_core::display::FlowList;
//! use lustra_core::models::{FlowDefinition, FlowId};
//!
//! let flows = vec![FlowDefinition {
//!     id: FlowId::new("interior"),
//!     title: "Interior".to_string(),
//!     before: vec!["Salpicadero".to_string()],
//!     cleaning: vec![],
//! }];
//!
//! let list = FlowList::with_title(&flows, "Servicios disponibles");
//! let output = format!("{}", list);
//! assert!(output.contains("# Servicios disponibles"));
//! assert!(output.contains("Interior"));
//! ```

use std::fmt;
use std::path::Path;

use crate::models::{CaptureStep, FlowDefinition, FlowId};
use crate::queue::Queue;
use crate::report::ComposedReport;
use crate::session::Progress;

/// Wrapper type for displaying the catalog's flows as a formatted list.
///
/// Each flow renders with its title, id, and the number of photos the
/// flow contributes to a queue.
pub struct FlowList<'a> {
    flows: &'a [FlowDefinition],
    title: Option<&'a str>,
}

impl<'a> FlowList<'a> {
    /// Create a new FlowList wrapper.
    pub fn new(flows: &'a [FlowDefinition]) -> Self {
        Self { flows, title: None }
    }

    /// Create a FlowList with a title header.
    pub fn with_title(flows: &'a [FlowDefinition], title: &'a str) -> Self {
        Self {
            flows,
            title: Some(title),
        }
    }
}

impl fmt::Display for FlowList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = self.title {
            writeln!(f, "# {title}")?;
            writeln!(f)?;
        }

        if self.flows.is_empty() {
            writeln!(f, "No hay servicios en el catálogo.")?;
            return Ok(());
        }

        for flow in self.flows {
            writeln!(f, "## {} (`{}`)", flow.title, flow.id)?;
            writeln!(f)?;
            writeln!(
                f,
                "- Fotos: **{}** ({} antes, {} limpieza, {} después)",
                flow.step_count(),
                flow.before.len(),
                flow.cleaning.len(),
                if flow.before.is_empty() { 0 } else { flow.before.len() },
            )?;
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Wrapper type for displaying a capture queue as a numbered checklist.
///
/// Steps render in queue order with their position, phase heading, and
/// label, separated by flow-and-phase group headers.
pub struct QueueList<'a> {
    queue: &'a Queue,
    title: Option<&'a str>,
}

impl<'a> QueueList<'a> {
    /// Create a new QueueList wrapper.
    pub fn new(queue: &'a Queue) -> Self {
        Self { queue, title: None }
    }

    /// Create a QueueList with a title header.
    pub fn with_title(queue: &'a Queue, title: &'a str) -> Self {
        Self {
            queue,
            title: Some(title),
        }
    }
}

impl fmt::Display for QueueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = self.title {
            writeln!(f, "# {title}")?;
            writeln!(f)?;
        }

        if self.queue.is_empty() {
            writeln!(f, "La cola está vacía.")?;
            return Ok(());
        }

        let mut group: Option<(&FlowId, crate::models::Phase)> = None;
        for (position, step) in self.queue.steps().iter().enumerate() {
            let key = (&step.flow, step.phase);
            if group != Some(key) {
                if group.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "**{} · {}**", step.flow, step.phase)?;
                group = Some(key);
            }
            writeln!(f, "{}. {}", position + 1, step.label)?;
        }

        Ok(())
    }
}

/// Wrapper type for displaying the current step as an operator prompt.
///
/// Renders as a single line, e.g.
/// `Paso 3 de 19 · ANTES: Asientos traseros (interior_detailed)`.
pub struct StepPrompt<'a> {
    step: &'a CaptureStep,
    progress: Progress,
}

impl<'a> StepPrompt<'a> {
    /// Create a prompt for the given step and session progress.
    pub fn new(step: &'a CaptureStep, progress: Progress) -> Self {
        Self { step, progress }
    }
}

impl fmt::Display for StepPrompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Paso {} de {} · {}: {} ({})",
            self.progress.completed + 1,
            self.progress.total,
            self.step.phase,
            self.step.label,
            self.step.flow,
        )
    }
}

/// Wrapper type for displaying a composed report and where it landed.
///
/// Renders the output path, page count, and the per-section accounting
/// the composer reported.
pub struct ReportOutcome<'a> {
    report: &'a ComposedReport,
    path: &'a Path,
}

impl<'a> ReportOutcome<'a> {
    /// Create a new ReportOutcome wrapper.
    pub fn new(report: &'a ComposedReport, path: &'a Path) -> Self {
        Self { report, path }
    }
}

impl fmt::Display for ReportOutcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Informe generado: `{}`", self.path.display())?;
        writeln!(f)?;
        writeln!(f, "- Páginas: **{}**", self.report.page_count)?;
        for section in &self.report.sections {
            write!(
                f,
                "- {}: {} fila(s)",
                section.title, section.rows_emitted
            )?;
            if section.rows_skipped > 0 {
                write!(f, ", {} omitida(s)", section.rows_skipped)?;
            }
            if section.placeholders > 0 {
                write!(f, ", {} imagen(es) no cargada(s)", section.placeholders)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
