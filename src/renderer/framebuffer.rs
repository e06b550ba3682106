//! CPU-side pixel buffer
//!
//! One `u32` per pixel, `0x00RRGGBB`. Rows run bottom-up: row 0 is the bottom
//! of the screen, the same layout as a 32-bit bottom-up DIB, so logical +Y
//! maps to screen-up without flipping in the scale transform.

use std::io::{self, Write};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: Vec<u32>,
    width: usize,
    height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height],
            width,
            height,
        }
    }

    /// Reallocate for a new surface size. Contents are cleared to black.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, 0);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw pixels, bottom row first
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y` (row 0 at the bottom)
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Fill the whole buffer with `color`
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Fill the half-open pixel rectangle `[x0, x1) × [y0, y1)`.
    ///
    /// Coordinates are clamped to the buffer first; an empty or inverted
    /// rectangle draws nothing.
    pub fn fill_rect_px(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let x0 = clamp_to(x0, self.width);
        let x1 = clamp_to(x1, self.width);
        let y0 = clamp_to(y0, self.height);
        let y1 = clamp_to(y1, self.height);

        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for row in self.pixels.chunks_exact_mut(self.width).take(y1).skip(y0) {
            row[x0..x1].fill(color);
        }
    }

    /// Append the buffer as top-down RGBA8, the layout of a canvas `ImageData`
    pub fn write_rgba(&self, out: &mut Vec<u8>) {
        out.reserve(self.pixels.len() * 4);
        for row in self.rows_top_down() {
            for &px in row {
                let [r, g, b] = rgb(px);
                out.extend_from_slice(&[r, g, b, 0xff]);
            }
        }
    }

    /// Write a binary PPM (P6) image of the buffer
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "P6\n{} {}\n255\n", self.width, self.height)?;
        let mut line = Vec::with_capacity(self.width * 3);
        for row in self.rows_top_down() {
            line.clear();
            for &px in row {
                line.extend_from_slice(&rgb(px));
            }
            writer.write_all(&line)?;
        }
        writer.flush()
    }

    fn rows_top_down(&self) -> impl Iterator<Item = &[u32]> {
        // chunks_exact panics on a zero chunk size
        let width = self.width.max(1);
        self.pixels.chunks_exact(width).rev()
    }
}

#[inline]
fn clamp_to(value: i32, max: usize) -> usize {
    value.clamp(0, i32::try_from(max).unwrap_or(i32::MAX)) as usize
}

#[inline]
fn rgb(px: u32) -> [u8; 3] {
    [(px >> 16) as u8, (px >> 8) as u8, px as u8]
}
