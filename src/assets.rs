//! Texture loading
//!
//! Sprite sheets are loaded once at startup. A sheet that fails to load is
//! replaced by a checkerboard so the game stays playable without art.

use std::path::Path;

use macroquad::prelude::*;

use crate::config::AssetPaths;
use crate::game::SheetId;

pub struct Assets {
    pub player: Texture2D,
    pub enemy: Texture2D,
    pub potion: Texture2D,
    pub tileset: Texture2D,
}

impl Assets {
    pub async fn load(paths: &AssetPaths) -> Self {
        Self {
            player: load_sheet(&paths.player, Color::from_rgba(230, 230, 220, 255)).await,
            enemy: load_sheet(&paths.enemy, Color::from_rgba(200, 60, 60, 255)).await,
            potion: load_sheet(&paths.potion, Color::from_rgba(90, 140, 230, 255)).await,
            tileset: load_sheet(&paths.tileset, Color::from_rgba(80, 90, 70, 255)).await,
        }
    }

    pub fn sheet(&self, id: SheetId) -> &Texture2D {
        match id {
            SheetId::Player => &self.player,
            SheetId::Enemy => &self.enemy,
            SheetId::Potion => &self.potion,
        }
    }
}

async fn load_sheet(path: &Path, tint: Color) -> Texture2D {
    let texture = match path.to_str() {
        Some(p) => match load_texture(p).await {
            Ok(tex) => {
                log::info!("Loaded {}", p);
                tex
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}, using placeholder", p, e);
                placeholder(tint)
            }
        },
        None => {
            log::warn!("Non UTF-8 asset path {:?}, using placeholder", path);
            placeholder(tint)
        }
    };
    texture.set_filter(FilterMode::Nearest);
    texture
}

/// 16x16-cell checkerboard
fn placeholder(tint: Color) -> Texture2D {
    const SIZE: u16 = 64;
    let dark = Color::new(tint.r * 0.6, tint.g * 0.6, tint.b * 0.6, 1.0);
    let mut image = Image::gen_image_color(SIZE, SIZE, tint);
    for y in 0..SIZE as u32 {
        for x in 0..SIZE as u32 {
            if ((x / 8) + (y / 8)) % 2 == 1 {
                image.set_pixel(x, y, dark);
            }
        }
    }
    Texture2D::from_image(&image)
}
