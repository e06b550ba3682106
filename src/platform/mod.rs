//! Platform abstraction layer
//!
//! The shells in `main.rs` own the window/canvas, the clock, and the
//! framebuffer's lifetime. What they share lives here.

use crate::sim::Button;

/// Map a DOM `KeyboardEvent.code` to a game button
pub fn button_for_key_code(code: &str) -> Option<Button> {
    match code {
        "ArrowUp" => Some(Button::Up),
        "ArrowDown" => Some(Button::Down),
        "KeyW" => Some(Button::W),
        "KeyS" => Some(Button::S),
        "ArrowLeft" => Some(Button::Left),
        "ArrowRight" => Some(Button::Right),
        "Enter" | "NumpadEnter" => Some(Button::Enter),
        _ => None,
    }
}
