//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the ILS viewer:
//! - Header panel (data, zoom, display toggles, theme selector)
//! - Map panel (grid and ILS symbols with panning and zooming)
//! - Status bar (view and data metadata display)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (mouse and touch interactions)

pub mod header;
pub mod map_panel;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
