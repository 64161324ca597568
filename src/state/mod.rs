//! State management modules for the ILS viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Map view state (center, zoom, projection)
//! - Interaction state (drag, zoom, hover)

mod map_view;
mod interaction;

pub use map_view::{MapViewSettings, MapViewState};
pub use interaction::InteractionState;
