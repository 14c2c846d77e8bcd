//! Game configuration
//!
//! Loaded from `assets/config.ron`. Every field has a default, so a config
//! file only needs to list what it changes. Missing files fall back to
//! `Config::default()`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Default config location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "assets/config.ron";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub gameplay: GameplayConfig,
    pub features: Features,
    pub paths: AssetPaths,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical screen size the game is drawn at
    pub screen_width: u32,
    pub screen_height: u32,
    /// Initial window size as a multiple of the logical size
    pub scale: u32,
    pub resizable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Ticks each animation frame stays on screen
    pub ticks_per_frame: u64,
    /// Fixed update rate, used to convert seconds into ticks
    pub ticks_per_second: u64,
    /// Half-size of the potion pickup box, in pixels
    pub pickup_radius: f32,
    /// Added to the player's velocity on every potion pickup
    pub velocity_boost: f32,
    /// Tiles per row in the tileset image
    pub tileset_columns: u32,
}

/// Toggles for the features added on top of the basic movement loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub enemies_chase: bool,
    pub potions: bool,
    pub tiles: bool,
    pub vision_blink: bool,
    pub click_inspect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub player: PathBuf,
    pub enemy: PathBuf,
    pub potion: PathBuf,
    pub tileset: PathBuf,
    pub tilemap: PathBuf,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tile Crawl".to_string(),
            screen_width: 320,
            screen_height: 240,
            scale: 2,
            resizable: true,
        }
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            ticks_per_frame: 8,
            ticks_per_second: 60,
            pickup_radius: 10.0,
            velocity_boost: 0.02,
            tileset_columns: 22,
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self {
            enemies_chase: true,
            potions: true,
            tiles: true,
            vision_blink: false,
            click_inspect: true,
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            player: "assets/images/characters/skeleton.png".into(),
            enemy: "assets/images/characters/ninja.png".into(),
            potion: "assets/images/misc/potion.png".into(),
            tileset: "assets/images/terrain/tileset.png".into(),
            tilemap: "assets/maps/spawn.json".into(),
        }
    }
}

impl Config {
    /// Load a config file, falling back to defaults if it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("no config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|e| GameError::io(path, e))?;
        Self::from_ron_str(&contents)
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, GameError> {
        Ok(ron::from_str(contents)?)
    }

    /// Save as pretty-printed RON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GameError> {
        let path = path.as_ref();
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("  ".to_string());
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents).map_err(|e| GameError::io(path, e))
    }

    /// Ticks a vision blink phase lasts; 0 disables blinking
    pub fn blink_period_ticks(&self, blink_every: u32) -> u64 {
        u64::from(blink_every) * self.gameplay.ticks_per_second
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path().join("nope.ron")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_ron_str("(gameplay: (pickup_radius: 4.0))").unwrap();
        assert_eq!(config.gameplay.pickup_radius, 4.0);
        assert_eq!(config.gameplay.ticks_per_frame, 8);
        assert_eq!(config.window.screen_width, 320);
        assert!(config.features.potions);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ron");

        let mut config = Config::default();
        config.window.title = "Dungeon".to_string();
        config.features.vision_blink = true;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "not valid ron data").unwrap();

        let result = Config::load(temp_file.path());
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH);
        let config = Config::load(path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_blink_period() {
        let config = Config::default();
        assert_eq!(config.blink_period_ticks(2), 120);
        assert_eq!(config.blink_period_ticks(0), 0);
    }
}
