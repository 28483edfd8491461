use std::path::Path;

use crate::engine::MAX_PIECE;
use crate::error::EngineError;

/// Board size and winning tile, loadable from TOML.
///
/// ```toml
/// size = 4
/// target_tile = 2048
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub size: usize,
    pub target_tile: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { size: 4, target_tile: MAX_PIECE }
    }
}

impl GameConfig {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, EngineError> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.size == 0 {
            return Err(EngineError::InvalidConfig("size must be at least 1".into()));
        }
        check_target(self.target_tile)
    }
}

pub(crate) fn check_target(target: u32) -> Result<(), EngineError> {
    if target < 2 || !target.is_power_of_two() {
        return Err(EngineError::InvalidConfig(format!("target_tile {target} is not a power of two >= 2")));
    }
    Ok(())
}
