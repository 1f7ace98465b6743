//! Wire contract of the incident backend: the response envelope, request and
//! response bodies, form validation and endpoint configuration.

pub mod config;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod loose;
pub mod routes;
pub mod validate;

pub use config::ApiConfig;
pub use envelope::ApiEnvelope;
pub use error::{ApiError, ValidationError};
