//! Core library for the Lustra vehicle detailing documentation tool.
//!
//! This crate provides the business logic for guided photo documentation
//! of detailing services: the flow catalog, the linearized capture queue,
//! the image store, and the PDF report composer.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): small data types with Display only
//!   where the value has one canonical rendering (e.g. [`models::Phase`])
//! - **Display Wrappers** ([`display`]): contextual formatting of
//!   catalogs, queues, prompts, and report outcomes as markdown
//! - **Terminal Rendering**: rich output via the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust
//! use lustra_core::{FlowCatalog, FlowId, Session};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Start a session over the built-in catalog
//! let mut session = Session::builder()
//!     .with_catalog(FlowCatalog::builtin())
//!     .with_selection([FlowId::new("exterior")])
//!     .build()
//!     .await?;
//!
//! // Walk the queue: one labeled photo per step
//! while let Some(step) = session.current_step() {
//!     println!("{}: {}", step.phase, step.label);
//!     let photo = lustra_core::capture::load_photo("foto.jpg".as_ref()).await?;
//!     session.record_capture(photo)?;
//! }
//!
//! // Compose and save the report
//! let report = session.compose_report(Default::default()).await?;
//! lustra_core::export::save_report(report.bytes, "informe.pdf".into()).await?;
//! # Ok(())
//! # }
//! ```

pub mod capture;
pub mod catalog;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod params;
pub mod queue;
pub mod report;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use catalog::FlowCatalog;
pub use display::{FlowList, QueueList, ReportOutcome, StepPrompt};
pub use error::{ReportError, Result};
pub use models::{
    CaptureStep, CapturedPhoto, FlowDefinition, FlowId, Phase, PhotoData, Slot, VehicleInfo,
};
pub use params::{RunReport, SelectFlows};
pub use queue::{build_queue, Queue};
pub use report::{ComposedReport, ReportOptions, ReportStrings, SectionSummary};
pub use session::{Progress, Session, SessionBuilder};
pub use store::ImageStore;
