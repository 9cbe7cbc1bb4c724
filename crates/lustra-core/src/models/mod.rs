//! Data models for service flows, capture steps, and captured photos.
//!
//! This module contains the core domain models of the checklist system.
//! Display implementations for user-facing formatting live in
//! [`crate::display`] to keep data structures separate from presentation.
//!
//! # Addressing Invariant
//!
//! A capture step is addressed by the triple `(flow, phase, step_index)`.
//! The same triple addresses exactly one slot in the
//! [`ImageStore`](crate::store::ImageStore), so a queue position and its
//! stored photo can never drift apart.

pub mod flow;
pub mod phase;
pub mod slot;
pub mod step;
pub mod vehicle;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use flow::{FlowDefinition, FlowId};
pub use phase::Phase;
pub use slot::{CapturedPhoto, PhotoData, Slot};
pub use step::CaptureStep;
pub use vehicle::VehicleInfo;
