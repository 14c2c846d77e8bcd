//! Game state
//!
//! `Game` owns every object in the scene. The frame loop calls `update`
//! once per tick and hands the result to the renderer.

use crate::config::Config;
use crate::input::FrameInput;
use super::entities::{Enemy, Player, Potion};
use super::systems;
use super::tilemap::Tilemap;

pub struct Game {
    pub config: Config,
    /// Ticks since the game started; drives animation and blinking
    pub tick: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub potions: Vec<Potion>,
    pub tilemap: Option<Tilemap>,
}

impl Game {
    /// Start a game with the default scene: the player, two chasing
    /// enemies and a potion.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tick: 0,
            player: Player::new(50.0, 50.0),
            enemies: vec![
                Enemy::chaser(50.0, 150.0, 0.5),
                Enemy::chaser(150.0, 50.0, 0.5),
            ],
            potions: vec![Potion::new(210.0, 100.0, 1)],
            tilemap: None,
        }
    }

    pub fn with_tilemap(mut self, tilemap: Tilemap) -> Self {
        self.tilemap = Some(tilemap);
        self
    }

    /// Advance the game by one tick.
    pub fn update(&mut self, input: &FrameInput) {
        systems::move_player(self, input);

        let features = self.config.features.clone();
        if features.enemies_chase {
            systems::follow_player(self);
        }
        if features.potions {
            systems::handle_potions(self);
        }
        if features.click_inspect {
            systems::handle_click(self, input);
        }
        if features.vision_blink {
            systems::update_vision(self);
        }

        self.tick += 1;
    }

    /// Whether every object still has a finite position
    pub fn positions_finite(&self) -> bool {
        self.player.sprite.is_finite()
            && self.enemies.iter().all(|e| e.sprite.is_finite())
            && self.potions.iter().all(|p| p.sprite.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;
    use macroquad::math::vec2;

    #[test]
    fn test_default_scene() {
        let game = Game::new(Config::default());
        assert_eq!(game.player.sprite.pos, vec2(50.0, 50.0));
        assert_eq!(game.player.velocity, 2.0);
        assert_eq!(game.player.health, 2);
        assert!(game.player.vision.can_see);
        assert_eq!(game.enemies.len(), 2);
        assert!(game.enemies.iter().all(|e| e.follows_player && e.velocity == 0.5));
        assert_eq!(game.potions.len(), 1);
        assert_eq!(game.potions[0].heal_amount, 1);
        assert!(game.tilemap.is_none());
    }

    #[test]
    fn test_update_counts_ticks() {
        let mut game = Game::new(Config::default());
        for _ in 0..3 {
            game.update(&FrameInput::default());
        }
        assert_eq!(game.tick, 3);
    }

    #[test]
    fn test_enemies_close_in_over_time() {
        let mut game = Game::new(Config::default());
        for _ in 0..400 {
            game.update(&FrameInput::default());
        }
        let player = game.player.sprite.pos;
        assert!(game.enemies.iter().all(|e| e.sprite.pos == player));
        assert!(game.positions_finite());
    }

    #[test]
    fn test_chase_disabled() {
        let mut config = Config::default();
        config.features.enemies_chase = false;
        let mut game = Game::new(config);
        game.update(&FrameInput::default());
        assert_eq!(game.enemies[0].sprite.pos, vec2(50.0, 150.0));
    }

    #[test]
    fn test_walk_to_potion() {
        let mut game = Game::new(Config::default());
        game.enemies.clear();

        let right = FrameInput::default().with_held(Direction::Right);
        let down = FrameInput::default().with_held(Direction::Down);
        // (50, 50) -> (210, 50) in 80 steps, then down to the potion
        for _ in 0..80 {
            game.update(&right);
        }
        for _ in 0..25 {
            game.update(&down);
            if game.potions.is_empty() {
                break;
            }
        }

        assert!(game.potions.is_empty());
        assert_eq!(game.player.health, 3);
        assert!(game.player.velocity > 2.0);
    }

    #[test]
    fn test_potions_disabled() {
        let mut config = Config::default();
        config.features.potions = false;
        let mut game = Game::new(config);
        game.player.sprite.pos = vec2(210.0, 100.0);
        game.update(&FrameInput::default());
        assert_eq!(game.potions.len(), 1);
        assert_eq!(game.player.health, 2);
    }

    #[test]
    fn test_vision_blink_runs_through_update() {
        let mut config = Config::default();
        config.features.vision_blink = true;
        let mut game = Game::new(config);
        let period = game.config.blink_period_ticks(game.player.vision.blink_every);

        for _ in 0..period {
            game.update(&FrameInput::default());
            assert!(game.player.vision.can_see);
        }
        // The tick counted `period` is the first dark one
        game.update(&FrameInput::default());
        assert!(!game.player.vision.can_see);
    }

    #[test]
    fn test_vision_blink_off_by_default() {
        let mut game = Game::new(Config::default());
        game.tick = game.config.blink_period_ticks(game.player.vision.blink_every);
        game.update(&FrameInput::default());
        assert!(game.player.vision.can_see);
    }
}
