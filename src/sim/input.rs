//! Per-frame input snapshot
//!
//! The shell owns the snapshot: it calls [`Input::begin_frame`] once per frame
//! and feeds raw key events through [`Input::process`]. The simulation only
//! reads it.

/// Logical buttons the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    W,
    S,
    Left,
    Right,
    Enter,
}

impl Button {
    pub const COUNT: usize = 7;

    pub const ALL: [Button; Self::COUNT] = [
        Button::Up,
        Button::Down,
        Button::W,
        Button::S,
        Button::Left,
        Button::Right,
        Button::Enter,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// State of one button for the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Button is held
    pub is_down: bool,
    /// `is_down` changed since the previous frame
    pub changed: bool,
}

/// Snapshot of every button
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    buttons: [ButtonState; Button::COUNT],
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button(&self, button: Button) -> ButtonState {
        self.buttons[button.index()]
    }

    /// Button is held this frame
    pub fn is_down(&self, button: Button) -> bool {
        self.button(button).is_down
    }

    /// Button went down this frame (edge-triggered)
    pub fn pressed(&self, button: Button) -> bool {
        let state = self.button(button);
        state.is_down && state.changed
    }

    /// Button went up this frame (edge-triggered)
    pub fn released(&self, button: Button) -> bool {
        let state = self.button(button);
        !state.is_down && state.changed
    }

    /// Forget last frame's transitions; held state carries over
    pub fn begin_frame(&mut self) {
        for state in &mut self.buttons {
            state.changed = false;
        }
    }

    /// Record a raw key event. Repeated key-down events leave `changed` alone.
    pub fn process(&mut self, button: Button, is_down: bool) {
        let state = &mut self.buttons[button.index()];
        state.changed = is_down != state.is_down;
        state.is_down = is_down;
    }
}
