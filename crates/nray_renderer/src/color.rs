//! RGBA radiance values.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul};

/// Four floating-point channels.
///
/// Channels are unbounded while radiance accumulates; they are only clamped
/// when converted to 8 bits with [`Color::to_rgba8`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Color {
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::brightness(0.0);
    pub const WHITE: Color = Color::brightness(1.0);

    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);

    /// Opaque color from red, green and blue.
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque grey with every color channel set to `brightness`.
    pub const fn brightness(brightness: f64) -> Self {
        Self::new(brightness, brightness, brightness)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Channels as `[red, green, blue, alpha]`.
    pub const fn to_array(self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Clamp every channel to `[0, 1]` and scale to 8 bits, truncating.
    pub fn to_rgba8(self) -> [u8; 4] {
        self.to_array().map(channel_to_u8)
    }
}

#[inline]
fn channel_to_u8(channel: f64) -> u8 {
    // NaN clamps to NaN and casts to 0
    (255.0 * channel.clamp(0.0, 1.0)) as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::CLEAR
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::rgba(
            self.red + rhs.red,
            self.green + rhs.green,
            self.blue + rhs.blue,
            self.alpha + rhs.alpha,
        )
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::rgba(
            self.red * rhs.red,
            self.green * rhs.green,
            self.blue * rhs.blue,
            self.alpha * rhs.alpha,
        )
    }
}

impl Div<f64> for Color {
    type Output = Color;

    fn div(self, scale: f64) -> Color {
        Color::rgba(
            self.red / scale,
            self.green / scale,
            self.blue / scale,
            self.alpha / scale,
        )
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Color {
        iter.fold(Color::CLEAR, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_constants() {
        assert_eq!(Color::CLEAR.to_array(), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(Color::BLACK.to_array(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Color::WHITE.to_array(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::MAGENTA, Color::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_color_blending() {
        let a = Color::rgba(0.5, 0.25, 1.0, 1.0);
        let b = Color::rgba(0.5, 0.5, 2.0, 0.5);

        assert_eq!(a + b, Color::rgba(1.0, 0.75, 3.0, 1.5));
        assert_eq!(a * b, Color::rgba(0.25, 0.125, 2.0, 0.5));
        assert_eq!(b / 2.0, Color::rgba(0.25, 0.25, 1.0, 0.25));

        let mut c = Color::CLEAR;
        c += a;
        assert_eq!(c, a);
    }

    #[test]
    fn test_color_sum_average() {
        let samples = [Color::RED, Color::GREEN, Color::BLUE, Color::BLACK];
        let average = samples.iter().copied().sum::<Color>() / samples.len() as f64;
        assert_eq!(average, Color::rgba(0.25, 0.25, 0.25, 1.0));
    }

    #[test]
    fn test_to_rgba8_clamps_and_truncates() {
        assert_eq!(Color::RED.to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(Color::rgba(2.0, -1.0, 0.5, 0.999).to_rgba8(), [255, 0, 127, 254]);
        assert_eq!(Color::CLEAR.to_rgba8(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_color_deserialize_defaults_alpha() {
        let color: Color = serde_json::from_str(r#"{"red": 0.1, "green": 0.2, "blue": 0.3}"#)
            .expect("valid color json");
        assert_eq!(color, Color::new(0.1, 0.2, 0.3));
    }
}
