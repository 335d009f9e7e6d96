//! Infrastructure layer
//!
//! This module handles the outside world:
//! - TUI foundation
//! - Headless rendering
//! - CLI argument processing
//! - Configuration loading

pub mod cli;
pub mod config;
pub mod headless;
pub mod tui;
