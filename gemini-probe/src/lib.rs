//! Gemini API key probe: a small Gemini REST client plus the run that lists
//! the models able to generate content and sends them one prompt.

pub mod client;
pub mod error;
pub mod models;
pub mod probe;
pub mod service;

#[cfg(test)]
mod test_support;

pub use gemini_probe_types as types;

pub use client::{Client, ClientBuilder, HttpOptions};
pub use error::{Error, Result};
pub use models::{GenerativeModel, Models};
pub use probe::{GenerationOutcome, ProbeConfig, ProbeError, ProbeStatus};
pub use service::ModelService;
