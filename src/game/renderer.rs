//! Draws the game into the window with macroquad.

use macroquad::prelude::*;

use crate::assets::Assets;
use super::sprite::{Sprite, FRAME_HEIGHT, FRAME_WIDTH};
use super::state::Game;
use super::tilemap::TILE_SIZE;
use super::viewport::Viewport;

pub const BACKGROUND: Color = Color::new(55.0 / 255.0, 38.0 / 255.0, 35.0 / 255.0, 1.0);
const LETTERBOX: Color = Color::new(0.0, 0.0, 0.0, 1.0);
const DARKNESS: Color = Color::new(0.0, 0.0, 0.0, 0.75);

/// Blit part of a texture at a logical position
fn blit(vp: &Viewport, texture: &Texture2D, pos: Vec2, source: Rect, size: Vec2) {
    let screen = vp.to_screen(pos);
    draw_texture_ex(
        texture,
        screen.x,
        screen.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vp.scaled(size)),
            source: Some(source),
            ..Default::default()
        },
    );
}

fn draw_sprite(vp: &Viewport, assets: &Assets, sprite: &Sprite, source: Rect) {
    blit(
        vp,
        assets.sheet(sprite.sheet),
        sprite.pos,
        source,
        vec2(FRAME_WIDTH, FRAME_HEIGHT),
    );
}

fn draw_tiles(game: &Game, assets: &Assets, vp: &Viewport) {
    let Some(map) = &game.tilemap else { return };
    for tile in map.draw_list(game.config.gameplay.tileset_columns) {
        blit(vp, &assets.tileset, tile.dest, tile.source, vec2(TILE_SIZE, TILE_SIZE));
    }
}

fn draw_player(game: &Game, assets: &Assets, vp: &Viewport) {
    let sprite = &game.player.sprite;
    let source = sprite.source_rect(game.tick, game.config.gameplay.ticks_per_frame);
    draw_sprite(vp, assets, sprite, source);
}

fn draw_potions(game: &Game, assets: &Assets, vp: &Viewport) {
    for potion in &game.potions {
        draw_sprite(vp, assets, &potion.sprite, Sprite::static_rect());
    }
}

fn draw_enemies(game: &Game, assets: &Assets, vp: &Viewport) {
    for enemy in &game.enemies {
        draw_sprite(vp, assets, &enemy.sprite, Sprite::static_rect());
    }
}

fn darken(game: &Game, vp: &Viewport) {
    if game.player.vision.can_see {
        return;
    }
    let origin = vp.to_screen(Vec2::ZERO);
    let size = vp.scaled(vp.logical);
    draw_rectangle(origin.x, origin.y, size.x, size.y, DARKNESS);
}

fn draw_hud(game: &Game, vp: &Viewport) {
    let origin = vp.to_screen(vec2(4.0, 12.0));
    let text = format!(
        "HP {}  SPD {:.2}",
        game.player.health, game.player.velocity
    );
    draw_text(&text, origin.x, origin.y, 10.0 * vp.scale, WHITE);
}

/// Cover the window outside the logical screen
fn draw_letterbox(vp: &Viewport) {
    let (w, h) = (screen_width(), screen_height());
    let top_left = vp.to_screen(Vec2::ZERO);
    let bottom_right = vp.to_screen(vp.logical);
    if top_left.x > 0.0 {
        draw_rectangle(0.0, 0.0, top_left.x, h, LETTERBOX);
        draw_rectangle(bottom_right.x, 0.0, w - bottom_right.x, h, LETTERBOX);
    }
    if top_left.y > 0.0 {
        draw_rectangle(0.0, 0.0, w, top_left.y, LETTERBOX);
        draw_rectangle(0.0, bottom_right.y, w, h - bottom_right.y, LETTERBOX);
    }
}

/// Draw one frame of the game.
pub fn draw_game(game: &Game, assets: &Assets, vp: &Viewport) {
    clear_background(BACKGROUND);

    if game.config.features.tiles {
        draw_tiles(game, assets, vp);
    }
    draw_player(game, assets, vp);
    if game.config.features.potions {
        draw_potions(game, assets, vp);
    }
    draw_enemies(game, assets, vp);
    darken(game, vp);
    draw_letterbox(vp);
    draw_hud(game, vp);
}
