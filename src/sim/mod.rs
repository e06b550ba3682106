//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same sequence of inputs and frame
//! deltas, the state evolves identically:
//! - No globals: everything is in `GameState`
//! - No clock reads: `dt` comes from the caller
//! - Drawing goes to a caller-supplied framebuffer

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::aabb_overlap;
pub use input::{Button, ButtonState, Input};
pub use state::{Ball, GameMode, GameState, MenuOption, Paddle, Score, Scorer};
pub use tick::tick;
