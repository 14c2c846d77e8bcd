//! Game objects
//!
//! Plain data structs. Behavior lives in `systems`.

use super::sprite::{SheetId, Sprite};

/// Whether the player can currently see, and how often sight blinks out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vision {
    pub can_see: bool,
    /// Seconds between blinks (0 = never blinks)
    pub blink_every: u32,
}

impl Default for Vision {
    fn default() -> Self {
        Self {
            can_see: true,
            blink_every: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub sprite: Sprite,
    pub vision: Vision,
    pub velocity: f32,
    pub health: u32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            sprite: Sprite::new(SheetId::Player, x, y),
            vision: Vision::default(),
            velocity: 2.0,
            health: 2,
        }
    }

    /// Add health, saturating at `u32::MAX`
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub sprite: Sprite,
    pub velocity: f32,
    pub follows_player: bool,
}

impl Enemy {
    pub fn chaser(x: f32, y: f32, velocity: f32) -> Self {
        Self {
            sprite: Sprite::new(SheetId::Enemy, x, y),
            velocity,
            follows_player: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Potion {
    pub sprite: Sprite,
    pub heal_amount: u32,
}

impl Potion {
    pub fn new(x: f32, y: f32, heal_amount: u32) -> Self {
        Self {
            sprite: Sprite::new(SheetId::Potion, x, y),
            heal_amount,
        }
    }
}
