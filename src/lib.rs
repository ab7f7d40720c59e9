//! tcalc - Terminal Calculator Library
//!
//! A keypad-style calculator for the terminal with a restricted expression
//! language and a bounded history of past calculations.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;
pub mod config;

pub use domain::*;
pub use application::*;
