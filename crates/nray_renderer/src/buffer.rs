//! Pixel storage for render output.

use crate::error::{RenderError, RenderResult};
use crate::Color;
use bytemuck::{Pod, Zeroable};
use std::ops::Index;

/// An 8-bit RGBA pixel, laid out as four consecutive bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color> for Rgba8 {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.to_rgba8();
        Self { r, g, b, a }
    }
}

/// Row-major buffer of floating-point colors; pixel `(x, y)` lives at
/// index `x + y * width`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Create a new buffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::CLEAR; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Flat index of `(x, y)`.
    pub fn index_of(&self, x: u32, y: u32) -> RenderResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(RenderError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x as usize + y as usize * self.width as usize)
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> RenderResult<Color> {
        Ok(self.pixels[self.index_of(x, y)?])
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> RenderResult<()> {
        let index = self.index_of(x, y)?;
        self.pixels[index] = color;
        Ok(())
    }

    /// The pixels of row `y`.
    pub fn row(&self, y: u32) -> RenderResult<&[Color]> {
        let start = self.index_of(0, y)?;
        Ok(&self.pixels[start..start + self.width as usize])
    }

    /// Overwrite row `y` with `row`, which must be exactly `width` long.
    pub fn write_row(&mut self, y: u32, row: &[Color]) -> RenderResult<()> {
        if row.len() != self.width as usize {
            return Err(RenderError::RowLength {
                expected: self.width as usize,
                actual: row.len(),
            });
        }
        let start = self.index_of(0, y)?;
        self.pixels[start..start + row.len()].copy_from_slice(row);
        Ok(())
    }

    /// Convert to clamped 8-bit pixels.
    pub fn to_rgba8(&self) -> Vec<Rgba8> {
        self.pixels.iter().copied().map(Rgba8::from).collect()
    }

    /// Convert to raw RGBA bytes (for display or saving).
    pub fn to_rgba8_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.to_rgba8()).to_vec()
    }
}

impl Index<(u32, u32)> for PixelBuffer {
    type Output = Color;

    /// Panics if `(x, y)` is outside the buffer.
    fn index(&self, (x, y): (u32, u32)) -> &Color {
        match self.index_of(x, y) {
            Ok(index) => &self.pixels[index],
            Err(err) => panic!("{err}"),
        }
    }
}
