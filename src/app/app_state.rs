//! Centralized application state for the ILS viewer.
//!
//! Composes the focused state components with the map data and the painters
//! that draw it.

use ilsmap::{
    DisplayOptions, GeoRect, IlsRenderer, MapLayerSettings, MapProjection, MemoryIlsQuery,
    RenderStats, ThemeManager, VirtualIlsGenerator,
};

use crate::app::ViewerSettings;
use crate::state::{InteractionState, MapViewState};

/// Main application state.
pub struct AppState {
    /// Visible map area
    pub map_view: MapViewState,

    /// Drag, zoom and hover state
    pub interaction: InteractionState,

    pub theme_manager: ThemeManager,
    pub theme_name: String,

    /// Object type display and diagnostics switches
    pub options: DisplayOptions,

    /// Zoom-indexed detail layers
    pub layers: MapLayerSettings,

    /// ILS records of the synthetic data set
    pub query: MemoryIlsQuery,

    pub renderer: IlsRenderer,

    /// Counts from the most recent ILS paint
    pub last_stats: RenderStats,

    /// Seed of the synthetic data set
    pub data_seed: u64,
}

impl AppState {
    /// Creates the state from persisted settings.
    pub fn new(theme_name: String, settings: ViewerSettings, layers: MapLayerSettings) -> Self {
        let theme_manager = ThemeManager::new();
        let renderer = IlsRenderer::new(
            settings.renderer,
            &theme_manager.theme_or_default(&theme_name).colors,
        );

        let generator = VirtualIlsGenerator::new();
        let records = generator.generate();
        tracing::info!(count = records.len(), seed = generator.seed(), "Generated virtual ILS records");

        Self {
            map_view: MapViewState::new(settings.map_view),
            interaction: InteractionState::new(),
            theme_manager,
            theme_name,
            options: settings.options,
            layers,
            query: MemoryIlsQuery::new(records),
            renderer,
            last_stats: RenderStats::default(),
            data_seed: generator.seed(),
        }
    }

    /// Settings to persist on shutdown.
    pub fn viewer_settings(&self) -> ViewerSettings {
        ViewerSettings {
            options: self.options.clone(),
            renderer: self.renderer.settings().clone(),
            map_view: self.map_view.settings(),
        }
    }

    /// Replaces the data set with a new synthetic one.
    pub fn regenerate_data(&mut self, seed: u64) {
        let region = self.map_view_region();
        let generator = VirtualIlsGenerator::with_config(region, self.query.records().len(), seed);
        self.query.set_records(generator.generate());
        self.data_seed = seed;
        tracing::info!(seed, "Regenerated virtual ILS records");
    }

    /// Area for generated data: the current view, grown so there is data to pan to.
    fn map_view_region(&self) -> GeoRect {
        self.map_view.projection().view_box().inflated(5.0)
    }
}
