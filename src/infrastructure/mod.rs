//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! the system clipboard and log output.

pub mod clipboard;
pub mod logging;

pub use clipboard::*;
pub use logging::*;
