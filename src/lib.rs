pub mod config;
pub mod geo;
pub mod ils;
pub mod layer;
pub mod painter;
pub mod projection;
pub mod query;
pub mod recording;
pub mod renderer;
pub mod text_utils;
pub mod theme;
pub mod virtual_ils;

// Export data model
pub use geo::{GeoPos, GeoRect};
pub use ils::{IlsRecord, ILS_FEATHER_LEN_NM};
pub use layer::{MapLayer, MapLayerSettings};

// Export collaborator seams and their implementations
pub use query::{IlsQuery, MemoryIlsQuery};
pub use projection::{MapProjection, MercatorProjection, ScreenPos};
pub use painter::{EguiMapPainter, MapPainter, PaintState, PaintTransform, SavedPaintState};
pub use recording::{PaintOp, RecordingPainter};

// Export the ILS painter
pub use renderer::{IlsRenderer, PaintContext, RenderStats, ViewContext};

// Export configuration and theme support
pub use config::{DisplayOptions, RendererSettings};
pub use theme::{MapColors, Theme, ThemeManager, hex_to_color32, with_alpha};

pub use virtual_ils::VirtualIlsGenerator;
