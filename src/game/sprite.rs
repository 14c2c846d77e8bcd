//! Sprites and sprite-sheet frame selection
//!
//! A sprite sheet is laid out in 16x16 cells. An animation is a vertical
//! strip of `frame_count` cells starting at (`frame_ox`, `frame_oy`).

use macroquad::math::{Rect, Vec2};

pub const FRAME_WIDTH: f32 = 16.0;
pub const FRAME_HEIGHT: f32 = 16.0;

/// Which loaded texture a sprite draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetId {
    Player,
    Enemy,
    Potion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub sheet: SheetId,
    pub pos: Vec2,
    pub frame_ox: u32,
    pub frame_oy: u32,
    pub frame_count: u32,
}

impl Sprite {
    pub fn new(sheet: SheetId, x: f32, y: f32) -> Self {
        Self {
            sheet,
            pos: Vec2::new(x, y),
            frame_ox: 0,
            frame_oy: 0,
            frame_count: 1,
        }
    }

    pub fn set_frames(&mut self, ox: u32, oy: u32, count: u32) {
        self.frame_ox = ox;
        self.frame_oy = oy;
        self.frame_count = count;
    }

    /// Index of the frame shown at `tick`
    pub fn frame_index(&self, tick: u64, ticks_per_frame: u64) -> u32 {
        let count = u64::from(self.frame_count.max(1));
        ((tick / ticks_per_frame.max(1)) % count) as u32
    }

    /// Source rectangle in the sheet for the frame shown at `tick`
    pub fn source_rect(&self, tick: u64, ticks_per_frame: u64) -> Rect {
        let i = self.frame_index(tick, ticks_per_frame);
        Rect::new(
            self.frame_ox as f32,
            (self.frame_oy + i * FRAME_WIDTH as u32) as f32,
            FRAME_WIDTH,
            FRAME_HEIGHT,
        )
    }

    /// First cell of the sheet, for sprites that never animate
    pub fn static_rect() -> Rect {
        Rect::new(0.0, 0.0, FRAME_WIDTH, FRAME_HEIGHT)
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sprite_is_single_frame() {
        let sprite = Sprite::new(SheetId::Player, 50.0, 50.0);
        assert_eq!(sprite.frame_count, 1);
        assert_eq!(sprite.source_rect(123, 8), Rect::new(0.0, 0.0, 16.0, 16.0));
    }

    #[test]
    fn test_walk_cycle_alternates_every_eight_ticks() {
        let mut sprite = Sprite::new(SheetId::Player, 0.0, 0.0);
        sprite.set_frames(48, 16, 2);

        assert_eq!(sprite.source_rect(0, 8), Rect::new(48.0, 16.0, 16.0, 16.0));
        assert_eq!(sprite.source_rect(7, 8), Rect::new(48.0, 16.0, 16.0, 16.0));
        assert_eq!(sprite.source_rect(8, 8), Rect::new(48.0, 32.0, 16.0, 16.0));
        assert_eq!(sprite.source_rect(16, 8), Rect::new(48.0, 16.0, 16.0, 16.0));
    }

    #[test]
    fn test_zero_frame_count_does_not_panic() {
        let mut sprite = Sprite::new(SheetId::Enemy, 0.0, 0.0);
        sprite.set_frames(0, 0, 0);
        assert_eq!(sprite.frame_index(40, 8), 0);
        assert_eq!(sprite.frame_index(40, 0), 0);
    }
}
