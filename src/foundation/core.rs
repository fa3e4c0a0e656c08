pub use kurbo::{Circle, Point, Rect, Vec2};

/// Straight (non-premultiplied) RGBA8 color.
///
/// The core animates an alpha multiplier per frame; [`Rgba8::with_alpha`]
/// produces the effective color handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Fully opaque color from RGB channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// This color with its alpha channel scaled by `alpha` in `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = (f64::from(self.a) * alpha.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}
