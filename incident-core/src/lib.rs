//! Domain model and client-side logic for the emergency response console.
//!
//! Everything here is plain data plus pure functions so the browser bundle and
//! the native triage tool share one implementation.

pub mod chat;
pub mod comms;
pub mod dashboard;
pub mod error;
pub mod filters;
pub mod map;
pub mod mock;
pub mod model;
pub mod triage;

pub use error::CoreError;
pub use filters::IncidentFilter;
pub use model::{Incident, IncidentStatus, Severity};
pub use triage::{analyze, AnalysisInput, AnalysisResult};
