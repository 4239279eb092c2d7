//! Segment color assignment.

use gpui::Hsla;
use rand::Rng;

/// A random fully opaque color.
pub fn random_color(rng: &mut impl Rng) -> Hsla {
    gpui::rgb(rng.random_range(0..=0x00FF_FFFF)).into()
}

/// Color of the segment at `index`: the configured color when there is one,
/// otherwise a fresh random color. Fallbacks are not remembered, so an
/// overflow segment changes color from one render to the next.
pub fn segment_color(colors: &[Hsla], index: usize, rng: &mut impl Rng) -> Hsla {
    match colors.get(index) {
        Some(color) => *color,
        None => random_color(rng),
    }
}
