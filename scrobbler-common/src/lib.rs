//! # Scrobbler Common Library
//!
//! Shared code for the scrobbler submission filters:
//! - Submission record model (SubmissionRecord, FieldValue)
//! - Common error type
//! - Filter configuration loading
//! - Logging initialization

pub mod config;
pub mod error;
pub mod logging;
pub mod record;

pub use error::{Error, Result};
pub use record::{FieldValue, SubmissionRecord};
