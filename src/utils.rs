use glam::Vec2;
use gpui::{point, px, Pixels, Point};

pub trait PixelsExt {
    fn as_f32(&self) -> f32;
}

impl PixelsExt for Pixels {
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }
}

/// Maps a point in chart-local coordinates to window pixels.
pub fn to_screen(origin: Point<Pixels>, local: Vec2) -> Point<Pixels> {
    point(origin.x + px(local.x), origin.y + px(local.y))
}
