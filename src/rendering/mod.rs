//! Rendering subsystem for the map background
//!
//! Navaid symbols are painted by the `ilsmap` painters; this module holds
//! the viewer's own background layers:
//! - Grid rendering (latitude/longitude lines and labels)

pub mod grid_renderer;
