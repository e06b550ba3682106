//! Software rasterizer
//!
//! Draws straight into a CPU-side [`Framebuffer`]. Pixel-space fills live in
//! `framebuffer`, logical-space shapes in `shapes`, text and digits in `font`.

pub mod font;
pub mod framebuffer;
pub mod shapes;

use std::fmt;

pub use font::{glyph_for, layout_number, layout_text};
pub use framebuffer::Framebuffer;

/// Rendering failure surfaced to the caller of the frame entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The bitmap font has no glyph for this character
    UnsupportedGlyph(char),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnsupportedGlyph(c) => write!(f, "no glyph for character {c:?}"),
        }
    }
}

impl std::error::Error for RenderError {}
