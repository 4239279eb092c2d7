// Frame building and painting for the radial chart

use crate::data_types::{ChartInput, RadialChartConfig};
use crate::layout::ChartGeometry;
use crate::palette::segment_color;
use crate::utils::to_screen;
use glam::Vec2;
use gpui::*;
use rand::Rng;
use tracing::trace;

/// One stroked arc of the ring.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcOp {
    pub index: usize,
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub color: Hsla,
    pub stroke_width: f32,
}

impl ArcOp {
    pub fn is_finite(&self) -> bool {
        self.start_angle.is_finite() && self.sweep_angle.is_finite()
    }
}

/// Dot marking the 12 o'clock seam once the animation has completed.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerOp {
    pub position: Vec2,
    pub color: Hsla,
    pub stroke_width: f32,
}

/// Percentage label. `position` is the horizontal center and the baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelOp {
    pub text: String,
    pub position: Vec2,
    pub font_size: f32,
}

/// Everything painted for one frame, in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub arcs: Vec<ArcOp>,
    pub remainder: Option<ArcOp>,
    pub marker: Option<MarkerOp>,
    pub label: Option<LabelOp>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
            && self.remainder.is_none()
            && self.marker.is_none()
            && self.label.is_none()
    }
}

/// Formats a fraction of the total as a percentage with two decimals.
pub fn format_label(fraction: f32) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Distance of the label baseline below the chart center.
pub fn label_baseline_offset(font_size: f32) -> f32 {
    font_size / 4.0
}

/// Text of the label drawn at `progress`, or `None` when the frame draws no
/// label. Unlike [`build_frame`] this needs no geometry, so it is known
/// before the chart has been laid out.
pub fn label_text(config: &RadialChartConfig, input: &ChartInput, progress: f32) -> Option<String> {
    if input.is_empty() {
        return None;
    }

    let segments = input.segments();
    let sweep = config.animation_style.renderer().sweep(&segments, progress);
    if sweep.interrupted {
        return None;
    }
    Some(format_label(segments.last().map_or(0.0, |s| s.cumulative)))
}

/// Builds the draw operations for `input` at `progress`.
///
/// `rng` supplies colors for segments past the configured palette.
pub fn build_frame(
    config: &RadialChartConfig,
    input: &ChartInput,
    geometry: &ChartGeometry,
    progress: f32,
    rng: &mut impl Rng,
) -> Frame {
    if input.is_empty() {
        return Frame::default();
    }

    let segments = input.segments();
    let sweep = config.animation_style.renderer().sweep(&segments, progress);

    let arcs: Vec<ArcOp> = sweep
        .arcs
        .iter()
        .map(|span| ArcOp {
            index: span.index,
            start_angle: span.start_angle,
            sweep_angle: span.sweep_angle,
            color: segment_color(&config.segment_colors, span.index, rng),
            stroke_width: config.stroke_width,
        })
        .collect();

    if sweep.interrupted {
        return Frame {
            arcs,
            ..Default::default()
        };
    }

    let marker = (progress == 1.0).then(|| MarkerOp {
        position: geometry.top(),
        color: segment_color(&config.segment_colors, 0, rng),
        stroke_width: config.stroke_width,
    });

    let last = segments.last();
    let remainder = if config.draw_remainder {
        input.remainder_fraction().map(|fraction| {
            let end_angle = last.map_or(0.0, |s| s.start_angle + s.sweep_angle);
            let angle = 360.0 * fraction;
            ArcOp {
                index: segments.len(),
                start_angle: end_angle + progress * 360.0,
                sweep_angle: angle * progress,
                color: config.empty_color,
                stroke_width: config.stroke_width,
            }
        })
    } else {
        None
    };

    let cumulative = last.map_or(0.0, |s| s.cumulative);
    let label = LabelOp {
        text: format_label(cumulative),
        position: Vec2::new(
            geometry.center.x,
            geometry.center.y + label_baseline_offset(config.font_size),
        ),
        font_size: config.font_size,
    };

    Frame {
        arcs,
        remainder,
        marker,
        label: Some(label),
    }
}

/// Paints the arcs and the marker of `frame`. The label is laid out by the view.
pub fn paint_frame(
    window: &mut Window,
    origin: Point<Pixels>,
    geometry: &ChartGeometry,
    frame: &Frame,
) {
    // Stroke wider than the viewport: the ring would turn inside out.
    let ring = geometry.bounding_box.size;
    if ring.width <= px(0.0) || ring.height <= px(0.0) {
        trace!(radius = geometry.radius, "ring has no room, skipping paint");
        return;
    }

    for arc in frame.arcs.iter().chain(frame.remainder.iter()) {
        paint_arc(window, origin, geometry, arc);
    }

    if let Some(marker) = &frame.marker {
        paint_dot(
            window,
            to_screen(origin, marker.position),
            marker.stroke_width,
            marker.color,
        );
    }
}

fn paint_arc(window: &mut Window, origin: Point<Pixels>, geometry: &ChartGeometry, arc: &ArcOp) {
    if !arc.is_finite() {
        trace!(index = arc.index, "skipping non-finite arc");
        return;
    }
    if arc.sweep_angle == 0.0 {
        return;
    }

    let points = geometry.arc_points(arc.start_angle, arc.sweep_angle);
    let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) else {
        return;
    };

    let mut builder = PathBuilder::stroke(px(arc.stroke_width));
    builder.move_to(to_screen(origin, first));
    for p in &points[1..] {
        builder.line_to(to_screen(origin, *p));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, arc.color);
    }

    // Round caps
    paint_dot(window, to_screen(origin, first), arc.stroke_width, arc.color);
    paint_dot(window, to_screen(origin, last), arc.stroke_width, arc.color);
}

fn paint_dot(window: &mut Window, center: Point<Pixels>, diameter: f32, color: Hsla) {
    let r = px(diameter / 2.0);
    let bounds = Bounds::new(point(center.x - r, center.y - r), size(r * 2.0, r * 2.0));
    window.paint_quad(fill(bounds, color).corner_radii(Corners::all(r)));
}
