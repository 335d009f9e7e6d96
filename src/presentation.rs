//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Dashboard layout and its variants
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod config;
pub mod layout;
pub mod snapshot;
pub mod widgets;
