//! Wire types for the Gemini models and generateContent endpoints.

pub mod content;
pub mod enums;
pub mod models;
pub mod response;
