//! Application layer managing state and calculation workflows.
//!
//! This module coordinates between the domain layer and presentation layer:
//! the calculator service owns the shared history, and the keypad state
//! drives it from user input.

pub mod service;
pub mod state;

pub use service::*;
pub use state::*;
