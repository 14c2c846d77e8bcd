//! Tilemaps exported from Tiled as JSON
//!
//! Only the parts of the Tiled format the game draws are read: each layer's
//! tile id array and its width/height in tiles. Ids are 1-based indices
//! into the tileset image; 0 marks an empty cell.

use std::fs;
use std::path::Path;

use macroquad::math::{Rect, Vec2};
use serde::Deserialize;

use crate::error::GameError;

/// Size of one tile, both on screen and in the tileset
pub const TILE_SIZE: f32 = 16.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tilemap {
    pub layers: Vec<TileLayer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TileLayer {
    #[serde(default)]
    pub name: String,
    pub data: Vec<u32>,
    pub width: u32,
    pub height: u32,
}

/// One tile to blit: where it goes and which part of the tileset it uses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileDraw {
    pub dest: Vec2,
    pub source: Rect,
}

impl Tilemap {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| GameError::io(path, e))?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, GameError> {
        let map: Tilemap = serde_json::from_str(contents)?;
        map.validate()?;
        Ok(map)
    }

    fn validate(&self) -> Result<(), GameError> {
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.width == 0 {
                return Err(GameError::InvalidLayer {
                    layer: i,
                    reason: "width is zero".to_string(),
                });
            }
            let expected = layer.width as usize * layer.height as usize;
            if layer.data.len() != expected {
                return Err(GameError::InvalidLayer {
                    layer: i,
                    reason: format!(
                        "{} tiles for a {}x{} layer",
                        layer.data.len(),
                        layer.width,
                        layer.height
                    ),
                });
            }
        }
        Ok(())
    }

    /// Every non-empty tile of every layer, bottom layer first
    pub fn draw_list(&self, tileset_columns: u32) -> impl Iterator<Item = TileDraw> + '_ {
        let columns = tileset_columns.max(1);
        self.layers.iter().flat_map(move |layer| {
            layer
                .data
                .iter()
                .enumerate()
                .filter(|(_, id)| **id != 0)
                .map(move |(index, &id)| {
                    let index = index as u32;
                    let x = (index % layer.width) as f32 * TILE_SIZE;
                    let y = (index / layer.width) as f32 * TILE_SIZE;

                    let src_x = ((id - 1) % columns) as f32 * TILE_SIZE;
                    let src_y = ((id - 1) / columns) as f32 * TILE_SIZE;

                    TileDraw {
                        dest: Vec2::new(x, y),
                        source: Rect::new(src_x, src_y, TILE_SIZE, TILE_SIZE),
                    }
                })
        })
    }

    /// Tile cell containing a logical pixel position, if inside any layer
    pub fn tile_at(&self, pos: Vec2) -> Option<(u32, u32)> {
        if pos.x < 0.0 || pos.y < 0.0 {
            return None;
        }
        let col = (pos.x / TILE_SIZE) as u32;
        let row = (pos.y / TILE_SIZE) as u32;
        self.layers
            .iter()
            .any(|l| col < l.width && row < l.height)
            .then_some((col, row))
    }

    /// Tile id of each layer at a cell (0 for empty or out of range)
    pub fn ids_at(&self, col: u32, row: u32) -> Vec<u32> {
        self.layers
            .iter()
            .map(|l| {
                if col < l.width && row < l.height {
                    l.data[(row * l.width + col) as usize]
                } else {
                    0
                }
            })
            .collect()
    }

    /// Pixel size of the largest layer
    pub fn pixel_size(&self) -> Vec2 {
        let w = self.layers.iter().map(|l| l.width).max().unwrap_or(0);
        let h = self.layers.iter().map(|l| l.height).max().unwrap_or(0);
        Vec2::new(w as f32 * TILE_SIZE, h as f32 * TILE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TWO_LAYERS: &str = r#"{
        "height": 2, "width": 3,
        "layers": [
            { "name": "ground", "data": [1, 2, 3, 23, 24, 45], "width": 3, "height": 2, "type": "tilelayer" },
            { "name": "props", "data": [0, 0, 0, 0, 7, 0], "width": 3, "height": 2 }
        ]
    }"#;

    #[test]
    fn test_draw_list_positions() {
        let map = Tilemap::from_json_str(TWO_LAYERS).unwrap();
        let tiles: Vec<_> = map.draw_list(22).collect();

        // 6 ground tiles + 1 prop, empty cells skipped
        assert_eq!(tiles.len(), 7);

        assert_eq!(tiles[0].dest, Vec2::new(0.0, 0.0));
        assert_eq!(tiles[0].source, Rect::new(0.0, 0.0, 16.0, 16.0));

        // Index 3 wraps to the second row
        assert_eq!(tiles[3].dest, Vec2::new(0.0, 16.0));
        // Id 23 is the first tile of the second tileset row
        assert_eq!(tiles[3].source, Rect::new(0.0, 16.0, 16.0, 16.0));

        // Id 45 -> (44 % 22, 44 / 22) = (0, 2)
        assert_eq!(tiles[5].source, Rect::new(0.0, 32.0, 16.0, 16.0));

        let prop = tiles[6];
        assert_eq!(prop.dest, Vec2::new(16.0, 16.0));
        assert_eq!(prop.source, Rect::new(96.0, 0.0, 16.0, 16.0));
    }

    #[test]
    fn test_tile_lookup() {
        let map = Tilemap::from_json_str(TWO_LAYERS).unwrap();
        assert_eq!(map.tile_at(Vec2::new(20.0, 18.0)), Some((1, 1)));
        assert_eq!(map.ids_at(1, 1), vec![24, 7]);
        assert_eq!(map.tile_at(Vec2::new(48.0, 0.0)), None);
        assert_eq!(map.tile_at(Vec2::new(-1.0, 0.0)), None);
        assert_eq!(map.pixel_size(), Vec2::new(48.0, 32.0));
    }

    #[test]
    fn test_rejects_mismatched_layer() {
        let bad = r#"{ "layers": [ { "data": [1, 2, 3], "width": 2, "height": 2 } ] }"#;
        let result = Tilemap::from_json_str(bad);
        assert!(matches!(result, Err(GameError::InvalidLayer { layer: 0, .. })));
    }

    #[test]
    fn test_rejects_zero_width() {
        let bad = r#"{ "layers": [ { "data": [], "width": 0, "height": 0 } ] }"#;
        assert!(Tilemap::from_json_str(bad).is_err());
    }

    #[test]
    fn test_shipped_map_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/maps/spawn.json");
        let map = Tilemap::load(path).unwrap();
        assert_eq!(map.pixel_size(), Vec2::new(320.0, 240.0));
        // Walls all around the edge
        assert_eq!(map.ids_at(0, 0)[0], 45);
        assert_eq!(map.ids_at(4, 4), vec![1, 7]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("map.json");
        std::fs::write(&path, TWO_LAYERS).unwrap();

        let map = Tilemap::load(&path).unwrap();
        assert_eq!(map.layers.len(), 2);
        assert_eq!(map.layers[0].name, "ground");

        let missing = Tilemap::load(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(GameError::Io { .. })));
    }
}
