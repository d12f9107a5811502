//! Shapeboard Application
//!
//! The application shell providing windowing, input handling,
//! and integration of all components.

mod app;
mod config;
mod shortcuts;
mod ui;

pub use app::{App, AppError};
pub use config::{AppConfig, CONFIG_ENV, ConfigError};
pub use shortcuts::{Shortcut, ShortcutAction, ShortcutRegistry};
pub use ui::{UiAction, UiState, render_ui};
