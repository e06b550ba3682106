//! Logical-space shapes
//!
//! Logical units scale with the buffer height (`RENDER_SCALE` of the height
//! per unit) and the logical origin sits at the center of the buffer.

use glam::Vec2;

use super::Framebuffer;
use crate::consts::RENDER_SCALE;

impl Framebuffer {
    /// Pixels per logical unit for the current buffer size
    #[inline]
    pub fn units_to_px(&self) -> f32 {
        self.height() as f32 * RENDER_SCALE
    }

    /// Fill a rectangle given by its logical center and half-extents
    pub fn draw_rect(&mut self, center: Vec2, half: Vec2, color: u32) {
        let scale = self.units_to_px();
        let center = center * scale + Vec2::new(self.width() as f32, self.height() as f32) / 2.0;
        let half = half * scale;

        // Truncation toward zero, like the float-to-int conversion in C
        let x0 = (center.x - half.x) as i32;
        let x1 = (center.x + half.x) as i32;
        let y0 = (center.y - half.y) as i32;
        let y1 = (center.y + half.y) as i32;

        self.fill_rect_px(x0, y0, x1, y1, color);
    }

    /// Paint everything outside the arena (letterbox and pillarbox bars)
    pub fn draw_arena_borders(&mut self, arena_half: Vec2, color: u32) {
        let arena = arena_half * self.units_to_px();
        let (width, height) = (self.width() as f32, self.height() as f32);

        let x0 = (width * 0.5 - arena.x) as i32;
        let x1 = (width * 0.5 + arena.x) as i32;
        let y0 = (height * 0.5 - arena.y) as i32;
        let y1 = (height * 0.5 + arena.y) as i32;

        let (w, h) = (self.width() as i32, self.height() as i32);
        self.fill_rect_px(0, 0, w, y0, color);
        self.fill_rect_px(0, y1, x1, h, color);
        self.fill_rect_px(0, y0, x0, y1, color);
        self.fill_rect_px(x1, y0, w, h, color);
    }
}
