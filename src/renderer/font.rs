//! Bitmap font and score digits
//!
//! Text uses a 7-row bitmap per character, one filled square per lit cell.
//! Numbers use chunky segment digits built from a handful of rectangles.
//! Both are laid out in logical units; `size` is the edge of one cell.

use glam::Vec2;

use super::{Framebuffer, RenderError};
use crate::consts::{GLYPH_ADVANCE, GLYPH_ROWS};

pub type Glyph = [&'static str; GLYPH_ROWS];

static BLANK: Glyph = [""; GLYPH_ROWS];

/// `A`..=`Z`, then `.` and `/`
static LETTERS: [Glyph; 28] = [
    [" 00", "0  0", "0  0", "0000", "0  0", "0  0", "0  0"],
    ["000", "0  0", "0  0", "000", "0  0", "0  0", "000"],
    [" 000", "0", "0", "0", "0", "0", " 000"],
    ["000", "0  0", "0  0", "0  0", "0  0", "0  0", "000"],
    ["0000", "0", "0", "000", "0", "0", "0000"],
    ["0000", "0", "0", "000", "0", "0", "0"],
    [" 000", "0", "0", "0 00", "0  0", "0  0", " 000"],
    ["0  0", "0  0", "0  0", "0000", "0  0", "0  0", "0  0"],
    ["000", " 0", " 0", " 0", " 0", " 0", "000"],
    [" 000", "   0", "   0", "   0", "0  0", "0  0", " 000"],
    ["0  0", "0  0", "0 0", "00", "0 0", "0  0", "0  0"],
    ["0", "0", "0", "0", "0", "0", "0000"],
    ["00 00", "0 0 0", "0 0 0", "0   0", "0   0", "0   0", "0   0"],
    ["00  0", "0 0 0", "0 0 0", "0 0 0", "0 0 0", "0 0 0", "0  00"],
    ["0000", "0  0", "0  0", "0  0", "0  0", "0  0", "0000"],
    [" 000", "0  0", "0  0", "000", "0", "0", "0"],
    [" 000 ", "0   0", "0   0", "0   0", "0 0 0", "0  0 ", " 00 0"],
    ["000", "0  0", "0  0", "000", "0  0", "0  0", "0  0"],
    [" 000", "0", "0 ", " 00", "   0", "   0", "000 "],
    ["000", " 0", " 0", " 0", " 0", " 0", " 0"],
    ["0  0", "0  0", "0  0", "0  0", "0  0", "0  0", " 00"],
    ["0   0", "0   0", "0   0", "0   0", "0   0", " 0 0", "  0"],
    ["0   0 ", "0   0", "0   0", "0 0 0", "0 0 0", "0 0 0", " 0 0 "],
    ["0   0", "0   0", " 0 0", "  0", " 0 0", "0   0", "0   0"],
    ["0   0", "0   0", " 0 0", "  0", "  0", "  0", "  0"],
    ["0000", "   0", "  0", " 0", "0", "0", "0000"],
    ["", "", "", "", "", "", "0"],
    ["   0", "  0", "  0", " 0", " 0", "0", "0"],
];

/// Bitmap for `c`, or `None` if the font has no glyph for it
pub fn glyph_for(c: char) -> Option<&'static Glyph> {
    match c {
        'A'..='Z' => LETTERS.get((c as u8 - b'A') as usize),
        '.' => Some(&LETTERS[26]),
        '/' => Some(&LETTERS[27]),
        ' ' => Some(&BLANK),
        _ => None,
    }
}

/// One rectangle of a digit, in cell units relative to the digit's pen position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub offset: Vec2,
    pub half: Vec2,
}

const fn seg(ox: f32, oy: f32, hx: f32, hy: f32) -> Segment {
    Segment {
        offset: Vec2::new(ox, oy),
        half: Vec2::new(hx, hy),
    }
}

/// Rectangles making up a digit plus how far the pen moves left afterwards
#[derive(Debug, Clone, Copy)]
pub struct DigitShape {
    pub segments: &'static [Segment],
    pub advance: f32,
}

// Bars: a full-height column is half (0.5, 2.5); rows sit at y = -2, 0, 2.
pub static DIGITS: [DigitShape; 10] = [
    DigitShape {
        segments: &[
            seg(-1.0, 0.0, 0.5, 2.5),
            seg(1.0, 0.0, 0.5, 2.5),
            seg(0.0, 2.0, 0.5, 0.5),
            seg(0.0, -2.0, 0.5, 0.5),
        ],
        advance: 4.0,
    },
    DigitShape {
        segments: &[seg(1.0, 0.0, 0.5, 2.5)],
        advance: 2.0,
    },
    DigitShape {
        segments: &[
            seg(0.0, 2.0, 1.5, 0.5),
            seg(0.0, 0.0, 1.5, 0.5),
            seg(0.0, -2.0, 1.5, 0.5),
            seg(1.0, 1.0, 0.5, 0.5),
            seg(-1.0, -1.0, 0.5, 0.5),
        ],
        advance: 4.0,
    },
    DigitShape {
        segments: &[
            seg(-0.5, 2.0, 1.0, 0.5),
            seg(-0.5, 0.0, 1.0, 0.5),
            seg(-0.5, -2.0, 1.0, 0.5),
            seg(1.0, 0.0, 0.5, 2.5),
        ],
        advance: 4.0,
    },
    DigitShape {
        segments: &[
            seg(1.0, 0.0, 0.5, 2.5),
            seg(-1.0, 1.0, 0.5, 1.5),
            seg(0.0, 0.0, 0.5, 0.5),
        ],
        advance: 4.0,
    },
    DigitShape {
        segments: &[
            seg(0.0, 2.0, 1.5, 0.5),
            seg(0.0, 0.0, 1.5, 0.5),
            seg(0.0, -2.0, 1.5, 0.5),
            seg(-1.0, 1.0, 0.5, 0.5),
            seg(1.0, -1.0, 0.5, 0.5),
        ],
        advance: 4.0,
    },
    DigitShape {
        segments: &[
            seg(0.5, 2.0, 1.0, 0.5),
            seg(0.5, 0.0, 1.0, 0.5),
            seg(0.5, -2.0, 1.0, 0.5),
            seg(-1.0, 0.0, 0.5, 2.5),
            seg(1.0, -1.0, 0.5, 0.5),
        ],
        advance: 4.0,
    },
    DigitShape {
        segments: &[seg(1.0, 0.0, 0.5, 2.5), seg(-0.5, 2.0, 1.0, 0.5)],
        advance: 4.0,
    },
    DigitShape {
        segments: &[
            seg(-1.0, 0.0, 0.5, 2.5),
            seg(1.0, 0.0, 0.5, 2.5),
            seg(0.0, 2.0, 0.5, 0.5),
            seg(0.0, -2.0, 0.5, 0.5),
            seg(0.0, 0.0, 0.5, 0.5),
        ],
        advance: 4.0,
    },
    DigitShape {
        segments: &[
            seg(-0.5, 2.0, 1.0, 0.5),
            seg(-0.5, 0.0, 1.0, 0.5),
            seg(-0.5, -2.0, 1.0, 0.5),
            seg(1.0, 0.0, 0.5, 2.5),
            seg(-1.0, 1.0, 0.5, 0.5),
        ],
        advance: 4.0,
    },
];

/// Walk the cells of `text`, calling `emit(center, half)` for every lit one.
///
/// Each character starts at the same baseline row and the pen moves right by
/// `GLYPH_ADVANCE` cells per character. Rows go downward from `pos.y`. Nothing
/// is emitted if the text holds a character without a glyph.
pub fn layout_text(
    text: &str,
    pos: Vec2,
    size: f32,
    mut emit: impl FnMut(Vec2, Vec2),
) -> Result<(), RenderError> {
    text.chars().try_for_each(|c| match glyph_for(c) {
        Some(_) => Ok(()),
        None => Err(RenderError::UnsupportedGlyph(c)),
    })?;

    let half = Vec2::splat(size * 0.5);
    let mut pen_x = pos.x;
    for glyph in text.chars().filter_map(glyph_for) {
        let mut y = pos.y;
        for row in glyph {
            let mut x = pen_x;
            for cell in row.bytes() {
                if cell == b'0' {
                    emit(Vec2::new(x, y), half);
                }
                x += size;
            }
            y -= size;
        }
        pen_x += size * GLYPH_ADVANCE;
    }
    Ok(())
}

/// Walk the digit rectangles of `value`, least significant digit first,
/// moving the pen left after each digit. Zero still produces one digit.
pub fn layout_number(value: u32, pos: Vec2, size: f32, mut emit: impl FnMut(Vec2, Vec2)) {
    let mut x = pos.x;
    let mut remaining = value;
    loop {
        let shape = &DIGITS[(remaining % 10) as usize];
        remaining /= 10;

        for segment in shape.segments {
            let center = Vec2::new(
                x + segment.offset.x * size,
                pos.y + segment.offset.y * size,
            );
            emit(center, segment.half * size);
        }
        x -= shape.advance * size;

        if remaining == 0 {
            break;
        }
    }
}

impl Framebuffer {
    /// Draw `text` with its first glyph's top-left cell centered on `pos`
    pub fn draw_text(
        &mut self,
        text: &str,
        pos: Vec2,
        size: f32,
        color: u32,
    ) -> Result<(), RenderError> {
        layout_text(text, pos, size, |center, half| {
            self.draw_rect(center, half, color)
        })
    }

    /// Draw a non-negative integer whose last digit is centered on `pos`
    pub fn draw_number(&mut self, value: u32, pos: Vec2, size: f32, color: u32) {
        layout_number(value, pos, size, |center, half| self.draw_rect(center, half, color));
    }
}
