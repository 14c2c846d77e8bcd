//! Per-frame game systems
//!
//! Each system is a free function over the `Game`, run in a fixed order by
//! `Game::update`.

use crate::input::{Direction, FrameInput};
use super::sprite::FRAME_HEIGHT;
use super::state::Game;

/// Column of the player sheet holding the frames for a facing direction
pub fn facing_column(dir: Direction) -> u32 {
    match dir {
        Direction::Down => 0,
        Direction::Up => 16,
        Direction::Left => 32,
        Direction::Right => 48,
    }
}

/// Steer the player and pick its animation.
///
/// Releasing a key shows the idle frame for that direction; holding one
/// moves the player and plays the two-frame walk cycle.
pub fn move_player(game: &mut Game, input: &FrameInput) {
    let player = &mut game.player;

    for dir in Direction::ALL {
        if input.is_released(dir) {
            player.sprite.set_frames(facing_column(dir), 0, 1);
        }
    }

    for dir in Direction::ALL {
        if input.is_held(dir) {
            player.sprite.pos += dir.delta() * player.velocity;
            player.sprite.set_frames(facing_column(dir), FRAME_HEIGHT as u32, 2);
        }
    }
}

/// Step `from` toward `to` by at most `step`
fn approach(from: f32, to: f32, step: f32) -> f32 {
    if from < to {
        (from + step).min(to)
    } else if from > to {
        (from - step).max(to)
    } else {
        from
    }
}

/// Move every chasing enemy toward the player, one axis at a time.
pub fn follow_player(game: &mut Game) {
    let target = game.player.sprite.pos;
    for enemy in game.enemies.iter_mut().filter(|e| e.follows_player) {
        let pos = &mut enemy.sprite.pos;
        pos.x = approach(pos.x, target.x, enemy.velocity);
        pos.y = approach(pos.y, target.y, enemy.velocity);
    }
}

pub fn update_player_velocity(game: &mut Game) {
    game.player.velocity += game.config.gameplay.velocity_boost;
}

/// Drink every potion the player is standing on.
pub fn handle_potions(game: &mut Game) {
    let radius = game.config.gameplay.pickup_radius;
    let player_pos = game.player.sprite.pos;

    let (picked, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut game.potions)
        .into_iter()
        .partition(|potion| {
            let d = (player_pos - potion.sprite.pos).abs();
            d.x < radius && d.y < radius
        });
    game.potions = kept;

    for potion in picked {
        game.player.heal(potion.heal_amount);
        update_player_velocity(game);
        log::info!("Picked up potion! Health: {}", game.player.health);
    }
}

/// Tile cell and per-layer ids under this frame's click, if any
pub fn clicked_tile(game: &Game, input: &FrameInput) -> Option<((u32, u32), Vec<u32>)> {
    let pos = input.click?;
    let map = game.tilemap.as_ref()?;
    let (col, row) = map.tile_at(pos)?;
    Some(((col, row), map.ids_at(col, row)))
}

/// Log the tile under a click, for poking at maps while building them.
pub fn handle_click(game: &mut Game, input: &FrameInput) {
    let Some(pos) = input.click else { return };
    match clicked_tile(game, input) {
        Some(((col, row), ids)) => log::info!("tile ({}, {}) ids {:?}", col, row, ids),
        None => log::debug!("click at ({:.0}, {:.0}) hit no tile", pos.x, pos.y),
    }
}

/// Blink the player's sight on and off every `blink_every` seconds.
pub fn update_vision(game: &mut Game) {
    let period = game.config.blink_period_ticks(game.player.vision.blink_every);
    let vision = &mut game.player.vision;
    if period == 0 {
        vision.can_see = true;
        return;
    }
    let can_see = (game.tick / period) % 2 == 0;
    if can_see != vision.can_see {
        log::debug!("vision {}", if can_see { "restored" } else { "lost" });
    }
    vision.can_see = can_see;
}
