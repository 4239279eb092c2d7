use super::{ArcSpan, SegmentRenderer, Sweep};
use crate::data_types::Segment;

/// The ring turns a full revolution into place while every segment grows
/// from nothing to its final sweep.
pub struct RotationSweep;

impl SegmentRenderer for RotationSweep {
    fn sweep(&self, segments: &[Segment], progress: f32) -> Sweep {
        let arcs = segments
            .iter()
            .map(|s| ArcSpan {
                index: s.index,
                start_angle: s.start_angle + progress * 360.0,
                sweep_angle: s.sweep_angle * progress,
            })
            .collect();

        Sweep {
            arcs,
            interrupted: false,
        }
    }
}
