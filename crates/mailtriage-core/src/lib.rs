//! MailTriage Core
//!
//! Core types and utilities shared across MailTriage components.
//!
//! This crate provides:
//! - The two-valued [`Category`] and the [`ClassificationResult`] shape
//! - Error types and result handling
//! - Accent-insensitive text folding used by every matcher

pub mod error;
pub mod text;
pub mod types;

pub use error::{Error, Result};
pub use text::fold;
pub use types::{Category, ChatMessage, ClassificationResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::text::fold;
    pub use crate::types::{Category, ChatMessage, ClassificationResult};
}
