//! Application-level modules for the ILS viewer.
//!
//! This module contains the centralized state and the coordinators for
//! settings and theme persistence.

mod app_state;
mod settings_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use settings_coordinator::{SettingsCoordinator, ViewerSettings};
pub use theme_coordinator::ThemeCoordinator;
