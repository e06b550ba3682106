//! Game state and core simulation types
//!
//! Everything the simulation mutates between frames lives in [`GameState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Top-level mode. There is no way back from `Gameplay` to `Menu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Menu,
    Gameplay,
}

/// Highlighted entry on the start menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MenuOption {
    #[default]
    SinglePlayer,
    Multiplayer,
}

impl MenuOption {
    pub fn toggled(self) -> Self {
        match self {
            MenuOption::SinglePlayer => MenuOption::Multiplayer,
            MenuOption::Multiplayer => MenuOption::SinglePlayer,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::SinglePlayer => "SINGLE PLAYER",
            MenuOption::Multiplayer => "MULTIPLAYER",
        }
    }
}

/// A paddle. It only moves vertically; `x` is fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    /// Vertical position of the paddle center
    pub pos: f32,
    /// Vertical velocity
    pub vel: f32,
}

impl Paddle {
    pub fn new(x: f32) -> Self {
        Self { x, pos: 0.0, vel: 0.0 }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.pos)
    }

    /// Integrate one step under `accel` with velocity damping.
    ///
    /// Hitting the top or bottom wall stops the paddle dead: the position is
    /// clamped so the paddle stays inside the arena and the velocity is zeroed.
    pub fn simulate(&mut self, accel: f32, dt: f32) {
        let accel = accel - self.vel * PADDLE_DAMPING;

        self.pos += self.vel * dt + accel * dt * dt * 0.5;
        self.vel += accel * dt;

        let half = PADDLE_HALF_SIZE.y;
        if self.pos + half > ARENA_HALF_SIZE.y {
            self.pos = ARENA_HALF_SIZE.y - half;
            self.vel = 0.0;
        } else if self.pos - half < -ARENA_HALF_SIZE.y {
            self.pos = -ARENA_HALF_SIZE.y + half;
            self.vel = 0.0;
        }
    }
}

/// The ball (a square)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: BALL_SERVE_VELOCITY,
        }
    }
}

impl Ball {
    pub fn half_size(&self) -> Vec2 {
        Vec2::splat(BALL_HALF_SIZE)
    }

    /// Serve again from the center towards the side that just conceded
    pub fn reset(&mut self) {
        self.vel.x = -self.vel.x;
        self.vel.y = 0.0;
        self.pos = Vec2::ZERO;
    }
}

/// Points per player. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player_1: u32,
    pub player_2: u32,
}

/// Which player scored a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scorer {
    Player1,
    Player2,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub mode: GameMode,
    /// Menu highlight
    pub menu_selection: MenuOption,
    /// Player 1 (right paddle) is driven by the AI
    pub player_1_ai: bool,
    /// Right paddle, Up/Down keys or AI
    pub player_1: Paddle,
    /// Left paddle, W/S keys
    pub player_2: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Frames simulated in `Gameplay`
    pub frames: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh session, sitting on the start menu
    pub fn new() -> Self {
        Self {
            mode: GameMode::Menu,
            menu_selection: MenuOption::SinglePlayer,
            player_1_ai: false,
            player_1: Paddle::new(PADDLE_OFFSET_X),
            player_2: Paddle::new(-PADDLE_OFFSET_X),
            ball: Ball::default(),
            score: Score::default(),
            frames: 0,
        }
    }

    /// Leave the menu with the current selection
    pub fn start_gameplay(&mut self) {
        self.mode = GameMode::Gameplay;
        self.player_1_ai = self.menu_selection != MenuOption::Multiplayer;
    }

    pub fn award_point(&mut self, scorer: Scorer) {
        match scorer {
            Scorer::Player1 => self.score.player_1 += 1,
            Scorer::Player2 => self.score.player_2 += 1,
        }
    }
}
