//! Soft Pong - two-paddle Pong drawn by a software rasterizer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input snapshot, physics, collisions, menu)
//! - `renderer`: CPU pixel buffer, rectangle fills, bitmap font
//! - `platform`: Shell-side helpers (key mapping)
//! - `settings`: User preferences (palette, window size, headless runs)

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use renderer::{Framebuffer, RenderError};
pub use settings::{Palette, Settings};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Arena half-extents (logical units)
    pub const ARENA_HALF_SIZE: Vec2 = Vec2::new(85.0, 45.0);

    /// Paddle half-extents
    pub const PADDLE_HALF_SIZE: Vec2 = Vec2::new(2.5, 12.0);
    /// Horizontal offset of each paddle from the arena center
    pub const PADDLE_OFFSET_X: f32 = 80.0;
    /// Acceleration while a movement key is held (units/s²)
    pub const PADDLE_ACCEL: f32 = 2000.0;
    /// Velocity damping applied to every paddle (1/s)
    pub const PADDLE_DAMPING: f32 = 10.0;

    /// AI proportional gain on the vertical distance to the ball
    pub const AI_GAIN: f32 = 100.0;
    /// AI acceleration limit
    pub const AI_MAX_ACCEL: f32 = 1300.0;

    /// Ball half-size (the ball is a square)
    pub const BALL_HALF_SIZE: f32 = 1.0;
    /// Ball velocity at startup
    pub const BALL_SERVE_VELOCITY: Vec2 = Vec2::new(130.0, 0.0);
    /// Vertical speed gained per unit of hit offset from the paddle center
    pub const BALL_SPIN_FROM_OFFSET: f32 = 2.0;
    /// Fraction of paddle velocity transferred to the ball on a hit
    pub const BALL_SPIN_FROM_PADDLE: f32 = 0.75;

    /// Logical units to pixels, as a fraction of the buffer height
    pub const RENDER_SCALE: f32 = 0.01;

    /// Rows in every glyph of the bitmap font
    pub const GLYPH_ROWS: usize = 7;
    /// Pen advance per character, in multiples of the glyph cell size
    pub const GLYPH_ADVANCE: f32 = 6.0;

    /// Frame delta used before the shell has measured one
    pub const DEFAULT_FRAME_DT: f32 = 0.016666;
    /// Default window size (pixels)
    pub const DEFAULT_WINDOW_WIDTH: u32 = 840;
    pub const DEFAULT_WINDOW_HEIGHT: u32 = 640;
}
