// Segment sweep algorithms, one per animation style

pub mod bidirectional;
pub mod rotation;
pub mod sequential;

pub use bidirectional::BidirectionalSweep;
pub use rotation::RotationSweep;
pub use sequential::SequentialSweep;

use crate::data_types::{AnimationStyle, Segment};

/// Angular extent of one segment for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpan {
    pub index: usize,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

/// Arcs produced for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sweep {
    pub arcs: Vec<ArcSpan>,
    /// Set when the algorithm stopped before the last segment. Nothing else
    /// (marker, label) is drawn for such a frame.
    pub interrupted: bool,
}

/// Trait for the per-style segment layout
pub trait SegmentRenderer {
    fn sweep(&self, segments: &[Segment], progress: f32) -> Sweep;
}

impl AnimationStyle {
    pub fn renderer(self) -> &'static dyn SegmentRenderer {
        match self {
            Self::Rotation => &RotationSweep,
            Self::Sequential => &SequentialSweep,
            Self::Bidirectional => &BidirectionalSweep,
        }
    }
}
