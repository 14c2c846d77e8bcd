//! Per-frame input snapshot
//!
//! Arrow keys and WASD both steer the player.

use macroquad::prelude::*;

/// A movement direction, in the order the game resolves them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Arrow key and WASD key for this direction
    pub fn keys(self) -> [KeyCode; 2] {
        match self {
            Direction::Right => [KeyCode::Right, KeyCode::D],
            Direction::Left => [KeyCode::Left, KeyCode::A],
            Direction::Up => [KeyCode::Up, KeyCode::W],
            Direction::Down => [KeyCode::Down, KeyCode::S],
        }
    }

    /// Unit step in screen space (y grows downward)
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Right => vec2(1.0, 0.0),
            Direction::Left => vec2(-1.0, 0.0),
            Direction::Up => vec2(0.0, -1.0),
            Direction::Down => vec2(0.0, 1.0),
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Input state for a single frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    held: [bool; 4],
    released: [bool; 4],
    /// Left click position: window coordinates from `poll`, logical
    /// screen coordinates once the frame loop has mapped it
    pub click: Option<Vec2>,
}

impl FrameInput {
    /// Read the current frame's input from macroquad
    pub fn poll() -> Self {
        let mut input = Self::default();
        for dir in Direction::ALL {
            let [arrow, letter] = dir.keys();
            input.held[dir.slot()] = is_key_down(arrow) || is_key_down(letter);
            input.released[dir.slot()] = is_key_released(arrow) || is_key_released(letter);
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            input.click = Some(vec2(x, y));
        }
        input
    }

    #[cfg(test)]
    pub fn with_held(mut self, dir: Direction) -> Self {
        self.held[dir.slot()] = true;
        self
    }

    #[cfg(test)]
    pub fn with_released(mut self, dir: Direction) -> Self {
        self.released[dir.slot()] = true;
        self
    }

    #[cfg(test)]
    pub fn with_click(mut self, x: f32, y: f32) -> Self {
        self.click = Some(vec2(x, y));
        self
    }

    /// Fold a newer snapshot into this one: held keys follow the newest
    /// frame, releases and clicks are kept until consumed.
    pub fn absorb(&mut self, newer: FrameInput) {
        self.held = newer.held;
        for (kept, new) in self.released.iter_mut().zip(newer.released) {
            *kept |= new;
        }
        if newer.click.is_some() {
            self.click = newer.click;
        }
    }

    /// Same held keys, with the one-shot events dropped
    pub fn held_only(&self) -> Self {
        Self {
            held: self.held,
            ..Self::default()
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held[dir.slot()]
    }

    pub fn is_released(&self, dir: Direction) -> bool {
        self.released[dir.slot()]
    }
}
