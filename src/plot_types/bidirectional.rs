use super::{ArcSpan, SegmentRenderer, Sweep};
use crate::data_types::Segment;

/// Each segment opens symmetrically from its own angular midpoint.
pub struct BidirectionalSweep;

impl SegmentRenderer for BidirectionalSweep {
    fn sweep(&self, segments: &[Segment], progress: f32) -> Sweep {
        let mut arcs = Vec::with_capacity(segments.len());

        for s in segments {
            // Same stop rule as the sequential sweep; progress is never
            // negative here so it does not fire.
            if progress < 0.0 {
                return Sweep {
                    arcs,
                    interrupted: true,
                };
            }
            let sweep_angle = s.sweep_angle * progress;
            arcs.push(ArcSpan {
                index: s.index,
                start_angle: s.start_angle + (s.sweep_angle - sweep_angle) / 2.0,
                sweep_angle,
            });
        }

        Sweep {
            arcs,
            interrupted: false,
        }
    }
}
