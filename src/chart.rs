use crate::animation::Animator;
use crate::data_types::{ChartInput, RadialChartConfig, MAX_SEGMENT_COLORS};
use crate::layout::ChartGeometry;
use crate::rendering::{build_frame, label_text, Frame, LabelOp};
use rand::Rng;
use std::time::Instant;
use tracing::{debug, warn};

/// Radial chart state: configuration, inputs, cached geometry and the
/// animation driver. Independent of the GPUI infrastructure so it can be
/// driven directly in tests; [`crate::RadialChartView`] wires it to a window.
#[derive(Clone)]
pub struct RadialChart {
    config: RadialChartConfig,
    input: ChartInput,
    size: Option<(f32, f32)>,
    geometry: Option<ChartGeometry>,
    animator: Animator,
}

impl RadialChart {
    pub fn new(config: RadialChartConfig) -> Self {
        Self {
            config: limit_palette(config),
            input: ChartInput::default(),
            size: None,
            geometry: None,
            animator: Animator::new(),
        }
    }

    pub fn config(&self) -> &RadialChartConfig {
        &self.config
    }

    /// Replaces the configuration. Geometry depends on the stroke width and
    /// is recomputed for the current size.
    pub fn set_config(&mut self, config: RadialChartConfig) {
        self.config = limit_palette(config);
        if let Some((width, height)) = self.size {
            self.geometry = ChartGeometry::compute(width, height, self.config.stroke_width);
        }
    }

    pub fn input(&self) -> &ChartInput {
        &self.input
    }

    pub fn total(&self) -> f32 {
        self.input.total
    }

    pub fn values(&self) -> &[f32] {
        &self.input.values
    }

    /// Sets the denominator and restarts the animation. Returns the new run's
    /// generation.
    pub fn set_total(&mut self, total: f32, now: Instant) -> u64 {
        if total <= 0.0 {
            warn!(total, "non-positive total, segment angles will be degenerate");
        }
        self.input.total = total;
        self.animator.restart(now)
    }

    /// Sets the segment values and restarts the animation. Returns the new
    /// run's generation.
    pub fn set_values(&mut self, values: Vec<f32>, now: Instant) -> u64 {
        debug!(count = values.len(), "values updated");
        self.input.values = values;
        self.animator.restart(now)
    }

    /// Recomputes geometry for a new viewport size. Returns `false` when the
    /// size is unchanged and the cached geometry was kept.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if self.size == Some((width, height)) {
            return false;
        }
        self.size = Some((width, height));
        self.geometry = ChartGeometry::compute(width, height, self.config.stroke_width);
        debug!(width, height, radius = ?self.geometry.as_ref().map(|g| g.radius), "chart resized");
        true
    }

    pub fn geometry(&self) -> Option<&ChartGeometry> {
        self.geometry.as_ref()
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn progress(&self) -> f32 {
        self.animator.progress()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Advances the animation run identified by `generation`.
    pub fn tick(&mut self, generation: u64, now: Instant) -> Option<f32> {
        self.animator.tick(generation, now)
    }

    /// Builds the draw operations for the current progress. Before the first
    /// non-empty resize nothing is drawn.
    pub fn render(&self, rng: &mut impl Rng) -> Frame {
        match &self.geometry {
            Some(geometry) => build_frame(
                &self.config,
                &self.input,
                geometry,
                self.animator.progress(),
                rng,
            ),
            None => Frame::default(),
        }
    }

    /// The label of the current frame, if one is drawn.
    pub fn label(&self) -> Option<LabelOp> {
        self.render(&mut rand::rng()).label
    }

    /// Text of the current label, available before the first resize.
    pub fn label_text(&self) -> Option<String> {
        label_text(&self.config, &self.input, self.animator.progress())
    }
}

/// Drops segment colors past [`MAX_SEGMENT_COLORS`].
fn limit_palette(mut config: RadialChartConfig) -> RadialChartConfig {
    if config.segment_colors.len() > MAX_SEGMENT_COLORS {
        warn!(
            count = config.segment_colors.len(),
            max = MAX_SEGMENT_COLORS,
            "ignoring extra segment colors"
        );
        config.segment_colors.truncate(MAX_SEGMENT_COLORS);
    }
    config
}
