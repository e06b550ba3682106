//! Per-frame simulation and rendering
//!
//! One call advances the game by `dt` and draws the frame into the target
//! buffer. Simulation and drawing are interleaved: the arena is painted
//! first, then the mode-specific work runs and draws on top of it.

use glam::Vec2;

use super::collision::aabb_overlap;
use super::input::{Button, Input};
use super::state::{Ball, GameMode, GameState, MenuOption, Paddle, Scorer};
use crate::consts::*;
use crate::renderer::{Framebuffer, RenderError};
use crate::settings::Palette;

/// Advance the game by one frame and draw it into `target`.
///
/// `dt` is used as-is; a huge delta can make the ball tunnel through a paddle.
pub fn tick(
    state: &mut GameState,
    input: &Input,
    dt: f32,
    target: &mut Framebuffer,
    palette: &Palette,
) -> Result<(), RenderError> {
    target.draw_rect(Vec2::ZERO, ARENA_HALF_SIZE, palette.arena);
    target.draw_arena_borders(ARENA_HALF_SIZE, palette.border);

    match state.mode {
        GameMode::Gameplay => {
            simulate_gameplay(state, input, dt);
            draw_gameplay(state, target, palette);
            Ok(())
        }
        GameMode::Menu => {
            update_menu(state, input);
            draw_menu(state, target, palette)
        }
    }
}

fn update_menu(state: &mut GameState, input: &Input) {
    if input.pressed(Button::Left) || input.pressed(Button::Right) {
        state.menu_selection = state.menu_selection.toggled();
    }

    if input.pressed(Button::Enter) {
        state.start_gameplay();
        log::info!(
            "Starting {} (player 1 AI: {})",
            state.menu_selection.label(),
            state.player_1_ai
        );
    }
}

fn draw_menu(
    state: &GameState,
    target: &mut Framebuffer,
    palette: &Palette,
) -> Result<(), RenderError> {
    let entries = [
        (MenuOption::SinglePlayer, Vec2::new(-80.0, -10.0)),
        (MenuOption::Multiplayer, Vec2::new(20.0, -10.0)),
    ];
    for (option, pos) in entries {
        let color = if option == state.menu_selection {
            palette.menu_highlight
        } else {
            palette.menu_dimmed
        };
        target.draw_text(option.label(), pos, 1.0, color)?;
    }
    Ok(())
}

/// Acceleration from a pair of held direction buttons
fn held_accel(input: &Input, up: Button, down: Button) -> f32 {
    let mut accel = 0.0;
    if input.is_down(up) {
        accel += PADDLE_ACCEL;
    }
    if input.is_down(down) {
        accel -= PADDLE_ACCEL;
    }
    accel
}

/// Proportional controller chasing the ball's height
fn ai_accel(paddle: &Paddle, ball: &Ball) -> f32 {
    ((ball.pos.y - paddle.pos) * AI_GAIN).clamp(-AI_MAX_ACCEL, AI_MAX_ACCEL)
}

fn simulate_gameplay(state: &mut GameState, input: &Input, dt: f32) {
    state.frames += 1;

    let player_1_accel = if state.player_1_ai {
        ai_accel(&state.player_1, &state.ball)
    } else {
        held_accel(input, Button::Up, Button::Down)
    };
    let player_2_accel = held_accel(input, Button::W, Button::S);

    state.player_1.simulate(player_1_accel, dt);
    state.player_2.simulate(player_2_accel, dt);

    let ball = &mut state.ball;
    ball.pos += ball.vel * dt;

    // Player 1's paddle is checked first; at most one paddle hit per frame
    if let Some(paddle) = [&state.player_1, &state.player_2]
        .into_iter()
        .find(|p| aabb_overlap(ball.pos, ball.half_size(), p.center(), PADDLE_HALF_SIZE))
    {
        bounce_off_paddle(ball, paddle);
        log::trace!("Paddle hit at x={}, ball vy={}", paddle.x, ball.vel.y);
    }

    let half = BALL_HALF_SIZE;
    if ball.pos.y + half > ARENA_HALF_SIZE.y {
        ball.pos.y = ARENA_HALF_SIZE.y - half;
        ball.vel.y = -ball.vel.y;
    } else if ball.pos.y - half < -ARENA_HALF_SIZE.y {
        ball.pos.y = -ARENA_HALF_SIZE.y + half;
        ball.vel.y = -ball.vel.y;
    }

    let scorer = if ball.pos.x + half > ARENA_HALF_SIZE.x {
        Some(Scorer::Player1)
    } else if ball.pos.x - half < -ARENA_HALF_SIZE.x {
        Some(Scorer::Player2)
    } else {
        None
    };

    if let Some(scorer) = scorer {
        ball.reset();
        state.award_point(scorer);
        log::debug!(
            "{:?} scores ({} - {})",
            scorer,
            state.score.player_1,
            state.score.player_2
        );
    }
}

/// Push the ball back out in front of `paddle` and send it the other way,
/// with vertical speed from the hit offset and the paddle's own motion
fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) {
    let toward_center = -paddle.x.signum();
    ball.pos.x = paddle.x + toward_center * (PADDLE_HALF_SIZE.x + BALL_HALF_SIZE);
    ball.vel.x = -ball.vel.x;
    ball.vel.y =
        (ball.pos.y - paddle.pos) * BALL_SPIN_FROM_OFFSET + paddle.vel * BALL_SPIN_FROM_PADDLE;
}

fn draw_gameplay(state: &GameState, target: &mut Framebuffer, palette: &Palette) {
    target.draw_number(state.score.player_1, Vec2::new(-10.0, 40.0), 1.0, palette.score);
    target.draw_number(state.score.player_2, Vec2::new(10.0, 40.0), 1.0, palette.score);

    target.draw_rect(state.ball.pos, state.ball.half_size(), palette.ball);
    for paddle in [&state.player_1, &state.player_2] {
        target.draw_rect(paddle.center(), PADDLE_HALF_SIZE, palette.paddle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gameplay(player_1_ai: bool) -> GameState {
        GameState {
            mode: GameMode::Gameplay,
            player_1_ai,
            ..GameState::new()
        }
    }

    fn frame(state: &mut GameState, input: &Input, dt: f32) {
        let mut fb = Framebuffer::new(170, 100);
        tick(state, input, dt, &mut fb, &Palette::default()).unwrap();
    }

    fn press(button: Button) -> Input {
        let mut input = Input::new();
        input.process(button, true);
        input
    }

    #[test]
    fn test_menu_toggle_and_confirm() {
        let mut state = GameState::new();

        frame(&mut state, &press(Button::Right), DEFAULT_FRAME_DT);
        assert_eq!(state.menu_selection, MenuOption::Multiplayer);
        assert_eq!(state.mode, GameMode::Menu);

        frame(&mut state, &press(Button::Left), DEFAULT_FRAME_DT);
        assert_eq!(state.menu_selection, MenuOption::SinglePlayer);

        frame(&mut state, &press(Button::Enter), DEFAULT_FRAME_DT);
        assert_eq!(state.mode, GameMode::Gameplay);
        assert!(state.player_1_ai);
    }

    #[test]
    fn test_held_key_toggles_once() {
        let mut state = GameState::new();
        let mut input = press(Button::Right);
        frame(&mut state, &input, DEFAULT_FRAME_DT);
        input.begin_frame();
        frame(&mut state, &input, DEFAULT_FRAME_DT);
        frame(&mut state, &input, DEFAULT_FRAME_DT);
        assert_eq!(state.menu_selection, MenuOption::Multiplayer);
    }

    #[test]
    fn test_menu_does_not_simulate() {
        let mut state = GameState::new();
        frame(&mut state, &Input::new(), 0.5);
        assert_eq!(state.ball, Ball::default());
        assert_eq!(state.frames, 0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut input = Input::new();
        input.process(Button::W, true);
        input.process(Button::S, true);
        assert_eq!(held_accel(&input, Button::W, Button::S), 0.0);

        input.process(Button::S, false);
        assert_eq!(held_accel(&input, Button::W, Button::S), PADDLE_ACCEL);
    }

    #[test]
    fn test_ai_accel_is_clamped() {
        let paddle = Paddle::new(PADDLE_OFFSET_X);
        let mut ball = Ball::default();

        ball.pos.y = 5.0;
        assert_eq!(ai_accel(&paddle, &ball), 500.0);
        ball.pos.y = 40.0;
        assert_eq!(ai_accel(&paddle, &ball), AI_MAX_ACCEL);
        ball.pos.y = -40.0;
        assert_eq!(ai_accel(&paddle, &ball), -AI_MAX_ACCEL);
    }

    #[test]
    fn test_player_1_keys_ignored_under_ai() {
        let mut state = gameplay(true);
        state.ball.vel = Vec2::ZERO;
        frame(&mut state, &press(Button::Up), 0.01);
        assert_eq!(state.player_1.pos, 0.0);

        let mut state = gameplay(false);
        state.ball.vel = Vec2::ZERO;
        frame(&mut state, &press(Button::Up), 0.01);
        assert!(state.player_1.pos > 0.0);
    }

    #[test]
    fn test_ball_bounces_off_player_1() {
        let mut state = gameplay(false);
        state.ball.pos = Vec2::new(77.0, 0.0);

        frame(&mut state, &Input::new(), 0.01);

        assert_eq!(state.ball.pos.x, 80.0 - 2.5 - 1.0);
        assert_eq!(state.ball.vel.x, -130.0);
        assert_eq!(state.ball.vel.y, 0.0);
    }

    #[test]
    fn test_ball_bounces_off_player_2_with_spin() {
        let mut state = gameplay(false);
        state.ball.pos = Vec2::new(-77.0, 5.0);
        state.ball.vel = Vec2::new(-130.0, 0.0);
        state.player_2.vel = 20.0;

        frame(&mut state, &Input::new(), 0.01);

        assert_eq!(state.ball.pos.x, -80.0 + 2.5 + 1.0);
        assert_eq!(state.ball.vel.x, 130.0);
        // Offset from the paddle center plus three quarters of its speed
        let expected = (5.0 - state.player_2.pos) * 2.0 + state.player_2.vel * 0.75;
        assert_eq!(state.ball.vel.y, expected);
        assert!(state.ball.vel.y > 10.0);
    }

    #[test]
    fn test_ball_passes_above_paddle() {
        let mut state = gameplay(false);
        state.ball.pos = Vec2::new(77.0, 20.0);

        frame(&mut state, &Input::new(), 0.01);

        assert_eq!(state.ball.vel.x, 130.0);
        assert!(state.ball.pos.x > 77.0);
    }

    #[test]
    fn test_ball_bounces_off_ceiling() {
        let mut state = gameplay(false);
        state.ball.pos = Vec2::new(0.0, 43.9);
        state.ball.vel = Vec2::new(0.0, 50.0);

        frame(&mut state, &Input::new(), 0.01);

        assert_eq!(state.ball.pos.y, 44.0);
        assert_eq!(state.ball.vel.y, -50.0);
    }

    #[test]
    fn test_ball_bounces_off_floor() {
        let mut state = gameplay(false);
        state.ball.pos = Vec2::new(0.0, -43.9);
        state.ball.vel = Vec2::new(0.0, -50.0);

        frame(&mut state, &Input::new(), 0.01);

        assert_eq!(state.ball.pos.y, -44.0);
        assert_eq!(state.ball.vel.y, 50.0);
    }

    #[test]
    fn test_right_exit_scores_for_player_1() {
        let mut state = gameplay(false);
        state.ball.pos = Vec2::new(84.5, 30.0);
        state.ball.vel = Vec2::new(130.0, 7.0);

        frame(&mut state, &Input::new(), 0.01);

        assert_eq!(state.score.player_1, 1);
        assert_eq!(state.score.player_2, 0);
        assert_eq!(state.ball.pos, Vec2::ZERO);
        assert_eq!(state.ball.vel, Vec2::new(-130.0, 0.0));
    }

    #[test]
    fn test_left_exit_scores_for_player_2() {
        let mut state = gameplay(false);
        state.ball.pos = Vec2::new(-84.5, -30.0);
        state.ball.vel = Vec2::new(-130.0, 0.0);

        frame(&mut state, &Input::new(), 0.01);

        assert_eq!(state.score.player_2, 1);
        assert_eq!(state.score.player_1, 0);
        assert_eq!(state.ball.vel, Vec2::new(130.0, 0.0));
    }

    #[test]
    fn test_gameplay_draws_ball_and_paddles() {
        let mut state = gameplay(false);
        state.ball.vel = Vec2::ZERO;
        let palette = Palette::default();
        let mut fb = Framebuffer::new(170, 100);
        tick(&mut state, &Input::new(), 0.0, &mut fb, &palette).unwrap();

        // 1 unit = 1 px; origin at (85, 50)
        assert_eq!(fb.pixel(85, 50), Some(palette.ball));
        assert_eq!(fb.pixel(85 + 80, 50), Some(palette.paddle));
        assert_eq!(fb.pixel(85 - 80, 50), Some(palette.paddle));
        assert_eq!(fb.pixel(85, 20), Some(palette.arena));
    }
}
