//! Input handling subsystem for UI interactions.
//!
//! This module contains all input handling logic:
//! - Map input handling (pan, zoom, cursor tracking)

pub mod map_input_handler;
