use crate::palette::random_color;
use eyre::{bail, Result, WrapErr};
use gpui::Hsla;
use serde::{Deserialize, Serialize};

/// Number of segment colors a chart can be configured with. Segments past
/// this index get a random color on every render.
pub const MAX_SEGMENT_COLORS: usize = 4;

// Serialization of Hsla as "#RRGGBB" / "#RRGGBBAA"
pub mod hex_color {
    use eyre::{eyre, Result};
    use gpui::Hsla;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn to_hex(color: Hsla) -> String {
        let rgba = color.to_rgb();
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (channel(rgba.r), channel(rgba.g), channel(rgba.b), channel(rgba.a));
        if a == u8::MAX {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    pub fn parse_hex_str(hex: &str) -> Result<Hsla> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(eyre!("invalid hex color {hex:?}: non-hex characters"));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| eyre!("invalid hex color {hex:?}: {e}"))?;
        match digits.len() {
            6 => Ok(gpui::rgb(value).into()),
            8 => Ok(gpui::rgba(value).into()),
            n => Err(eyre!("invalid hex color {hex:?}: expected 6 or 8 digits, got {n}")),
        }
    }

    pub fn serialize<S>(color: &Hsla, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_hex(*color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Hsla, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        parse_hex_str(&hex).map_err(serde::de::Error::custom)
    }

    pub mod list {
        use super::*;
        use serde::ser::SerializeSeq;

        pub fn serialize<S>(colors: &[Hsla], serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut seq = serializer.serialize_seq(Some(colors.len()))?;
            for color in colors {
                seq.serialize_element(&to_hex(*color))?;
            }
            seq.end()
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Hsla>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Vec::<String>::deserialize(deserializer)?
                .iter()
                .map(|hex| parse_hex_str(hex).map_err(serde::de::Error::custom))
                .collect()
        }
    }
}

/// How segments reach their final position while progress runs 0 -> 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationStyle {
    /// The whole ring spins into place while every segment grows.
    #[default]
    Rotation,
    /// Segments fill one after another.
    Sequential,
    /// Each segment grows outward from its own angular center.
    Bidirectional,
}

impl AnimationStyle {
    /// Maps a numeric style index (0, 1, 2). Unknown indices fall back to rotation.
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => Self::Sequential,
            2 => Self::Bidirectional,
            _ => Self::Rotation,
        }
    }

    pub fn index(self) -> i32 {
        match self {
            Self::Rotation => 0,
            Self::Sequential => 1,
            Self::Bidirectional => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialChartConfig {
    pub stroke_width: f32,
    pub font_size: f32,
    #[serde(with = "hex_color::list")]
    pub segment_colors: Vec<Hsla>,
    #[serde(with = "hex_color")]
    pub empty_color: Hsla,
    pub animation_style: AnimationStyle,
    /// Draws the share of `total` not covered by the values in `empty_color`.
    pub draw_remainder: bool,
}

impl Default for RadialChartConfig {
    fn default() -> Self {
        let mut rng = rand::rng();
        Self {
            stroke_width: 5.0,
            font_size: 20.0,
            segment_colors: (0..MAX_SEGMENT_COLORS).map(|_| random_color(&mut rng)).collect(),
            empty_color: random_color(&mut rng),
            animation_style: AnimationStyle::Rotation,
            draw_remainder: false,
        }
    }
}

impl RadialChartConfig {
    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).wrap_err("failed to parse radial chart config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize radial chart config")
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            bail!("stroke_width must be positive, got {}", self.stroke_width);
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            bail!("font_size must be positive, got {}", self.font_size);
        }
        if self.segment_colors.len() > MAX_SEGMENT_COLORS {
            bail!(
                "at most {} segment colors are supported, got {}",
                MAX_SEGMENT_COLORS,
                self.segment_colors.len()
            );
        }
        Ok(())
    }

    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the segment colors, keeping at most [`MAX_SEGMENT_COLORS`].
    pub fn with_segment_colors(mut self, colors: impl IntoIterator<Item = Hsla>) -> Self {
        self.segment_colors = colors.into_iter().take(MAX_SEGMENT_COLORS).collect();
        self
    }

    pub fn with_empty_color(mut self, color: Hsla) -> Self {
        self.empty_color = color;
        self
    }

    pub fn with_animation_style(mut self, style: AnimationStyle) -> Self {
        self.animation_style = style;
        self
    }

    pub fn with_remainder(mut self, draw_remainder: bool) -> Self {
        self.draw_remainder = draw_remainder;
        self
    }
}
