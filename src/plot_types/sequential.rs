use super::{ArcSpan, SegmentRenderer, Sweep};
use crate::data_types::Segment;

/// Segments fill one at a time, each reaching its full sweep before the next
/// one starts.
pub struct SequentialSweep;

impl SegmentRenderer for SequentialSweep {
    fn sweep(&self, segments: &[Segment], progress: f32) -> Sweep {
        let mut arcs = Vec::with_capacity(segments.len());
        // Progress left to hand out, in fractions of the total.
        let mut budget = progress;

        for s in segments {
            if budget < 0.0 {
                return Sweep {
                    arcs,
                    interrupted: true,
                };
            }
            let portion = if budget < s.fraction {
                budget / s.fraction
            } else {
                1.0
            };
            arcs.push(ArcSpan {
                index: s.index,
                start_angle: s.start_angle,
                sweep_angle: s.sweep_angle * portion,
            });
            budget -= s.fraction;
        }

        Sweep {
            arcs,
            interrupted: false,
        }
    }
}
