//! Ring geometry derived from the viewport size.

use glam::Vec2;
use gpui::{point, px, Bounds, Pixels};

/// Angular step used when flattening an arc into line segments.
const ARC_STEP_DEGREES: f32 = 4.0;
const MAX_ARC_STEPS: usize = 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub center: Vec2,
    pub radius: f32,
    /// Square the ring is inscribed in, in chart-local pixels.
    pub bounding_box: Bounds<Pixels>,
}

impl ChartGeometry {
    /// Fits the ring inside a `width` x `height` viewport so that a stroke of
    /// `stroke_width` stays within it. Returns `None` for an empty viewport.
    pub fn compute(width: f32, height: f32, stroke_width: f32) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }

        let radius = width.min(height) / 2.0 - stroke_width / 2.0;
        let center = Vec2::new(width / 2.0, height / 2.0);
        let bounding_box = Bounds::from_corners(
            point(px(center.x - radius), px(center.y - radius)),
            point(px(center.x + radius), px(center.y + radius)),
        );

        Some(Self {
            center,
            radius,
            bounding_box,
        })
    }

    /// Point on the ring at `angle` degrees (0 = 3 o'clock, clockwise with y down).
    pub fn point_at(&self, angle: f32) -> Vec2 {
        let rad = angle.to_radians();
        self.center + Vec2::new(rad.cos(), rad.sin()) * self.radius
    }

    /// The 12 o'clock point of the ring.
    pub fn top(&self) -> Vec2 {
        Vec2::new(self.center.x, self.center.y - self.radius)
    }

    /// Flattens the arc starting at `start` and spanning `sweep` degrees into a
    /// polyline. Non-finite angles produce no points.
    pub fn arc_points(&self, start: f32, sweep: f32) -> Vec<Vec2> {
        if !start.is_finite() || !sweep.is_finite() {
            return Vec::new();
        }

        let steps = ((sweep.abs() / ARC_STEP_DEGREES).ceil() as usize).clamp(1, MAX_ARC_STEPS);
        let step = sweep / steps as f32;
        (0..=steps)
            .map(|i| self.point_at(start + step * i as f32))
            .collect()
    }
}
