//! ILS symbol painter.
//!
//! Draws each visible localizer as a feather outline from the antenna
//! position along the back course, with an optional label running along the
//! upper beam edge.

use std::time::Instant;

use egui::{Color32, Pos2, Stroke};

use crate::config::{DisplayOptions, RendererSettings};
use crate::geo::{nm_to_meter, normalize_course, opposed_course, GeoRect};
use crate::ils::{IlsRecord, ILS_FEATHER_LEN_NM};
use crate::layer::MapLayer;
use crate::painter::{MapPainter, SavedPaintState};
use crate::projection::MapProjection;
use crate::query::IlsQuery;
use crate::theme::MapColors;

/// Labels are dropped when the feather is this short or shorter on screen
pub const MIN_LABEL_FEATHER_PX: f32 = 40.0;

/// Interaction state of the map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewContext {
    /// The map is at rest and can be painted in full quality
    #[default]
    Still,
    /// The map is being dragged or zoomed
    Animation,
}

/// Everything a map painter needs for one frame.
pub struct PaintContext<'a> {
    pub painter: &'a mut dyn MapPainter,
    pub projection: &'a dyn MapProjection,
    /// Geographic area covered by the view
    pub view_box: GeoRect,
    pub view_context: ViewContext,
    /// Layer selected for the current zoom
    pub map_layer: &'a MapLayer,
    /// Layer actually in effect, which differs from `map_layer` when the view
    /// switched to an airport diagram
    pub map_layer_effective: &'a MapLayer,
    pub options: &'a DisplayOptions,
}

/// Counts from one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Records returned by the query
    pub queried: usize,
    /// Records that passed the visibility test and were painted
    pub drawn: usize,
}

/// Returns true if ILS symbols are shown at all for these options and layers.
pub fn ils_layer_visible(options: &DisplayOptions, layer: &MapLayer, effective_layer: &MapLayer) -> bool {
    options.show_ils && !effective_layer.airport_diagram && layer.ils
}

/// Returns true if the antenna is on screen or the feather extent overlaps the view.
pub fn ils_visible(projection: &dyn MapProjection, view_box: &GeoRect, ils: &IlsRecord) -> bool {
    let size = projection.screen_size_for_rect(&ils.bounding);
    projection.world_to_screen(ils.position, size).visible || view_box.intersects(&ils.bounding)
}

/// Builds the label for the detail requested by `layer`.
pub fn ils_label_text(ils: &IlsRecord, layer: &MapLayer) -> Option<String> {
    if layer.ils_info {
        let mut text = format!(
            "{} / {:.2} / {:.0}°M",
            ils.ident,
            ils.frequency_mhz(),
            normalize_course(ils.heading + ils.magvar)
        );
        if ils.has_glideslope() {
            text.push_str(&format!(" / GS {:.1}°", ils.slope));
        }
        if ils.dme {
            text.push_str(" / DME");
        }
        Some(text)
    } else if layer.ils_ident {
        Some(ils.ident.clone())
    } else {
        None
    }
}

/// Clockwise rotation of the label frame in degrees.
///
/// The label runs along the beam edge that keeps the text upright.
pub fn label_rotation(heading: f32, width: f32) -> f32 {
    if heading > 180.0 {
        heading + 90.0 - width / 2.0
    } else {
        opposed_course(heading) + 90.0 + width / 2.0
    }
}

/// Horizontal start of the label in the rotated frame, centering it on the feather.
pub fn label_offset(heading: f32, feather_len: f32, text_width: f32) -> f32 {
    if heading > 180.0 {
        (feather_len - text_width) / 2.0
    } else {
        -(feather_len + text_width) / 2.0
    }
}

/// Paints ILS feathers and labels.
#[derive(Debug, Clone)]
pub struct IlsRenderer {
    settings: RendererSettings,
    symbol_color: Color32,
    text_color: Color32,
}

impl IlsRenderer {
    pub fn new(settings: RendererSettings, colors: &MapColors) -> Self {
        Self {
            settings,
            symbol_color: colors.ils_symbol,
            text_color: colors.ils_text,
        }
    }

    pub fn set_colors(&mut self, colors: &MapColors) {
        self.symbol_color = colors.ils_symbol;
        self.text_color = colors.ils_text;
    }

    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    /// Queries the records for the view and paints the visible ones.
    pub fn render(&self, context: &mut PaintContext<'_>, query: &mut dyn IlsQuery) -> RenderStats {
        let mut stats = RenderStats::default();

        if !ils_layer_visible(context.options, context.map_layer, context.map_layer_effective) {
            return stats;
        }

        let draw_fast = context.view_context == ViewContext::Animation;
        let diagnostics = context.options.verbose && context.view_context == ViewContext::Still;

        let timer = Instant::now();
        // No result is the same as an empty one
        let records = query
            .query_ils(&context.view_box, context.map_layer, draw_fast)
            .unwrap_or_default();
        stats.queried = records.len();

        if diagnostics {
            tracing::debug!(
                count = records.len(),
                query_ms = timer.elapsed().as_secs_f64() * 1000.0,
                view_box = ?context.view_box,
                layer = ?context.map_layer,
                "ILS query"
            );
        }

        let timer = Instant::now();
        for ils in records {
            if ils_visible(context.projection, &context.view_box, ils) {
                self.draw_symbol(&mut *context.painter, context.projection, ils, context.map_layer, draw_fast);
                stats.drawn += 1;
            }
        }

        if diagnostics {
            tracing::debug!(
                drawn = stats.drawn,
                paint_ms = timer.elapsed().as_secs_f64() * 1000.0,
                "ILS paint"
            );
        }

        stats
    }

    /// Paints one feather and, unless `fast`, its label.
    pub fn draw_symbol(
        &self,
        painter: &mut dyn MapPainter,
        projection: &dyn MapProjection,
        ils: &IlsRecord,
        layer: &MapLayer,
        fast: bool,
    ) {
        let mut painter = SavedPaintState::new(painter);

        painter.set_pen(Stroke::new(self.settings.symbol_line_width, self.symbol_color));

        let size = projection.screen_size_for_rect(&ils.bounding);
        let origin = projection.world_to_screen(ils.position, size).point;
        let p1 = projection.world_to_screen(ils.pos1, size).point;
        let p2 = projection.world_to_screen(ils.pos2, size).point;
        let pmid = projection.world_to_screen(ils.posmid, size).point;

        painter.draw_line(origin, p1);
        painter.draw_line(p1, pmid);
        painter.draw_line(pmid, p2);
        painter.draw_line(p2, origin);

        if ils.has_glideslope() {
            painter.draw_line(p1, p2);
        }

        if fast {
            return;
        }

        let Some(text) = ils_label_text(ils, layer) else {
            return;
        };

        painter.set_pen(Stroke::new(self.settings.text_line_width, self.text_color));
        painter.translate(origin.to_vec2());

        let rotation = label_rotation(ils.heading, ils.width);
        let feather_len = projection
            .pixel_for_meter(nm_to_meter(ILS_FEATHER_LEN_NM), rotation)
            .round();

        if feather_len <= MIN_LABEL_FEATHER_PX {
            return;
        }

        let text = painter.elided_text(&text, feather_len);
        let text_width = painter.text_width(&text);
        let text_x = label_offset(ils.heading, feather_len, text_width);
        let descent = painter.descent();

        painter.rotate(rotation);
        painter.draw_text(Pos2::new(text_x, -descent), &text);
        painter.reset_transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPos;

    fn ils(heading: f32, slope: f32, dme: bool) -> IlsRecord {
        IlsRecord::new("IKLO", 110_350, heading, 2.0, slope, 4.0, dme, GeoPos::new(8.0, 50.0))
    }

    #[test]
    fn test_info_label_full() {
        let layer = MapLayer::new(50.0).ils(true).ils_info(true);
        let text = ils_label_text(&ils(248.0, 3.0, true), &layer).unwrap();
        assert_eq!(text, "IKLO / 110.35 / 250°M / GS 3.0° / DME");
    }

    #[test]
    fn test_info_label_localizer_only() {
        let layer = MapLayer::new(50.0).ils(true).ils_info(true);
        let text = ils_label_text(&ils(359.0, 0.0, false), &layer).unwrap();
        // 359 + 2 wraps around north
        assert_eq!(text, "IKLO / 110.35 / 1°M");
    }

    #[test]
    fn test_ident_and_no_label() {
        let ident = MapLayer::new(50.0).ils(true).ils_ident(true);
        assert_eq!(ils_label_text(&ils(90.0, 3.0, true), &ident).as_deref(), Some("IKLO"));

        let plain = MapLayer::new(50.0).ils(true);
        assert_eq!(ils_label_text(&ils(90.0, 3.0, true), &plain), None);
    }

    #[test]
    fn test_label_rotation_branches() {
        assert_eq!(label_rotation(270.0, 4.0), 358.0);
        assert_eq!(label_rotation(90.0, 4.0), 272.0 + 90.0);
        // 180 itself takes the opposed course branch
        assert_eq!(label_rotation(180.0, 4.0), 0.0 + 90.0 + 2.0);
    }

    #[test]
    fn test_label_offset_branches() {
        assert_eq!(label_offset(270.0, 100.0, 40.0), 30.0);
        assert_eq!(label_offset(90.0, 100.0, 40.0), -70.0);
        assert_eq!(label_offset(180.0, 100.0, 40.0), -70.0);
    }

    mod diagnostics {
        use super::*;
        use crate::recording::RecordingPainter;
        use crate::MercatorProjection;
        use egui::{Rect, Vec2};
        use std::sync::{Arc, Mutex};
        use tracing_subscriber::layer::{Context, SubscriberExt};

        /// Collects the message of every event.
        #[derive(Clone, Default)]
        struct MessageLog(Arc<Mutex<Vec<String>>>);

        struct MessageVisitor(String);

        impl tracing::field::Visit for MessageVisitor {
            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                if field.name() == "message" {
                    self.0 = format!("{value:?}");
                }
            }
        }

        impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for MessageLog {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                let mut visitor = MessageVisitor(String::new());
                event.record(&mut visitor);
                self.0.lock().unwrap().push(visitor.0);
            }
        }

        struct EmptyQuery;

        impl IlsQuery for EmptyQuery {
            fn query_ils(&mut self, _rect: &GeoRect, _layer: &MapLayer, _lazy: bool) -> Option<&[IlsRecord]> {
                None
            }
        }

        fn render_logged(view_context: ViewContext) -> (Vec<String>, RenderStats) {
            let log = MessageLog::default();
            let subscriber = tracing_subscriber::registry().with(log.clone());

            let projection = MercatorProjection::new(
                GeoPos::new(8.5, 50.0),
                10.0,
                Rect::from_min_size(egui::Pos2::ZERO, Vec2::new(800.0, 600.0)),
            );
            let layer = MapLayer::new(50.0).ils(true).ils_info(true);
            let options = DisplayOptions {
                verbose: true,
                ..Default::default()
            };
            let renderer = IlsRenderer::new(RendererSettings::default(), &crate::ThemeManager::new().theme_or_default("Day").colors);
            let mut painter = RecordingPainter::default();

            let stats = tracing::subscriber::with_default(subscriber, || {
                let mut context = PaintContext {
                    painter: &mut painter,
                    projection: &projection,
                    view_box: projection.view_box(),
                    view_context,
                    map_layer: &layer,
                    map_layer_effective: &layer,
                    options: &options,
                };
                renderer.render(&mut context, &mut EmptyQuery)
            });

            let messages = log.0.lock().unwrap().clone();
            (messages, stats)
        }

        #[test]
        fn test_paint_timing_logged_without_query_result() {
            let (messages, stats) = render_logged(ViewContext::Still);
            assert_eq!(stats, RenderStats::default());
            assert!(messages.iter().any(|m| m == "ILS query"), "{messages:?}");
            assert!(messages.iter().any(|m| m == "ILS paint"), "{messages:?}");
        }

        #[test]
        fn test_no_diagnostics_while_animating() {
            let (messages, _) = render_logged(ViewContext::Animation);
            assert!(messages.is_empty(), "{messages:?}");
        }
    }

    #[test]
    fn test_layer_visibility_policy() {
        let options = DisplayOptions::default();
        let layer = MapLayer::new(50.0).ils(true);
        let diagram = MapLayer::new(1.0).ils(true).airport_diagram(true);

        assert!(ils_layer_visible(&options, &layer, &layer));
        assert!(!ils_layer_visible(&options, &layer, &diagram));
        assert!(!ils_layer_visible(&options, &MapLayer::new(50.0), &MapLayer::new(50.0)));

        let hidden = DisplayOptions {
            show_ils: false,
            ..Default::default()
        };
        assert!(!ils_layer_visible(&hidden, &layer, &layer));
    }
}
