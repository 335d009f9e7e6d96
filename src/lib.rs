//! # Statboard - a static analytics dashboard for the terminal
//!
//! Renders a fixed grid of cards (profile, task summary, trackers, a
//! productivity chart, meetings, notifications and skills) with Ratatui.
//! All content is compiled in; widgets are pure functions of it.
//!
//! ## Modules
//!
//! - [`domain`] - Display records and the built-in content
//! - [`presentation`] - Widgets, layout variants, styles and keybindings
//! - [`infrastructure`] - Terminal, headless rendering, CLI and config
//! - [`app`] - The event loop tying them together
//! - [`utils`] - Logging, panic handling and paths

pub mod action;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod utils;

pub use action::Action;
pub use app::App;
pub use domain::DashboardContent;
pub use presentation::layout::{composition, Dashboard, LayoutVariant, WidgetId};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
