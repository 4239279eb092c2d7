/// Angle (degrees) of the first segment's leading edge: 12 o'clock.
pub const START_ANGLE: f32 = -90.0;

/// The values being charted and the denominator they are measured against.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartInput {
    pub total: f32,
    pub values: Vec<f32>,
}

/// Per-segment angles derived from a [`ChartInput`], in draw order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub value: f32,
    pub fraction: f32,
    /// Leading edge in degrees (0 = 3 o'clock, clockwise).
    pub start_angle: f32,
    pub sweep_angle: f32,
    /// Sum of the fractions up to and including this segment.
    pub cumulative: f32,
}

impl ChartInput {
    pub fn new(total: f32, values: Vec<f32>) -> Self {
        Self { total, values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Splits the ring into segments. A zero total is not guarded:
    /// the resulting fractions and angles are non-finite.
    pub fn segments(&self) -> Vec<Segment> {
        let mut start_angle = START_ANGLE;
        let mut cumulative = 0.0;

        self.values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let fraction = value / self.total;
                let sweep_angle = 360.0 * fraction;
                cumulative += fraction;
                let segment = Segment {
                    index,
                    value,
                    fraction,
                    start_angle,
                    sweep_angle,
                    cumulative,
                };
                start_angle += sweep_angle;
                segment
            })
            .collect()
    }

    /// Share of `total` not covered by `values`, if any.
    pub fn remainder_fraction(&self) -> Option<f32> {
        let sum: f32 = self.values.iter().sum();
        if sum == self.total {
            None
        } else {
            Some((self.total - sum) / self.total)
        }
    }
}
