//! Session configuration
//!
//! One [`GameConfig`] describes a whole game variant: grid size, gravity
//! interval, scoring rate, spawn position and shape set. Every field has a
//! default, so a partial TOML table is a valid configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::piece::{Shape, ShapeSet};
use crate::types::{
    DEFAULT_COLS, DEFAULT_POINTS_PER_LINE, DEFAULT_ROWS, DEFAULT_TICK_MS, MAX_BOARD_DIM,
};

/// Reasons a configuration cannot drive a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `rows` or `cols` is zero or above the supported maximum
    BoardSize { rows: usize, cols: usize },
    /// `tick_ms` is zero
    ZeroTick,
    /// Shape `index` does not fit on the board in some rotation
    ShapeTooLarge { index: usize },
    /// Spawn column places a shape partly off the board
    SpawnOutside { index: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardSize { rows, cols } => write!(
                f,
                "board size {rows}x{cols} must be between 1x1 and {MAX_BOARD_DIM}x{MAX_BOARD_DIM}"
            ),
            ConfigError::ZeroTick => write!(f, "tick_ms must be greater than zero"),
            ConfigError::ShapeTooLarge { index } => {
                write!(f, "shape {index} does not fit on the board")
            }
            ConfigError::SpawnOutside { index } => {
                write!(f, "shape {index} spawns outside the board")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parameters of one game variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Gravity interval; fixed for the whole session
    pub tick_ms: u32,
    pub points_per_line: u32,
    pub spawn_row: i32,
    /// `None` centres each shape horizontally
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spawn_col: Option<i32>,
    pub shapes: ShapeSet,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_ms: DEFAULT_TICK_MS,
            points_per_line: DEFAULT_POINTS_PER_LINE,
            spawn_row: 0,
            spawn_col: None,
            shapes: ShapeSet::classic(),
        }
    }
}

impl GameConfig {
    /// Top-left spawn offset for `shape`
    pub fn spawn_offset(&self, shape: &Shape) -> (i32, i32) {
        let col = self
            .spawn_col
            .unwrap_or_else(|| (self.cols.saturating_sub(shape.width()) / 2) as i32);
        (self.spawn_row, col)
    }

    /// Check that the configuration can drive a session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims_ok = |n: usize| (1..=MAX_BOARD_DIM).contains(&n);
        if !dims_ok(self.rows) || !dims_ok(self.cols) {
            return Err(ConfigError::BoardSize {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }

        for (index, shape) in self.shapes.iter().enumerate() {
            let side = shape.height().max(shape.width());
            if side > self.rows || side > self.cols {
                return Err(ConfigError::ShapeTooLarge { index });
            }
            let (row, col) = self.spawn_offset(shape);
            let inside = row >= 0
                && col >= 0
                && row as usize + shape.height() <= self.rows
                && col as usize + shape.width() <= self.cols;
            if !inside {
                return Err(ConfigError::SpawnOutside { index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 20);
        assert_eq!(config.cols, 10);
        assert_eq!(config.tick_ms, 500);
        assert_eq!(config.points_per_line, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_spawn_offset_centres_shape() {
        let config = GameConfig::default();
        let shapes = ShapeSet::classic();
        let i = shapes.iter().next().unwrap();
        assert_eq!(config.spawn_offset(i), (0, 3));

        let fixed = GameConfig {
            spawn_col: Some(4),
            ..GameConfig::default()
        };
        assert_eq!(fixed.spawn_offset(i), (0, 4));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_rows = GameConfig {
            rows: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            zero_rows.validate(),
            Err(ConfigError::BoardSize { .. })
        ));

        let zero_tick = GameConfig {
            tick_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(zero_tick.validate(), Err(ConfigError::ZeroTick));

        let narrow = GameConfig {
            cols: 3,
            ..GameConfig::default()
        };
        assert_eq!(narrow.validate(), Err(ConfigError::ShapeTooLarge { index: 0 }));

        let off_edge = GameConfig {
            spawn_col: Some(8),
            ..GameConfig::default()
        };
        assert_eq!(off_edge.validate(), Err(ConfigError::SpawnOutside { index: 0 }));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("cols = 20\ntick_ms = 250\n").unwrap();
        assert_eq!(config.cols, 20);
        assert_eq!(config.tick_ms, 250);
        assert_eq!(config.rows, 20);
        assert_eq!(config.shapes.len(), 7);
    }

    #[test]
    fn test_toml_shapes() {
        let config: GameConfig = toml::from_str("shapes = [[[1, 1], [1, 1]], [[1]]]\n").unwrap();
        assert_eq!(config.shapes.len(), 2);
        assert!(toml::from_str::<GameConfig>("shapes = []\n").is_err());
        assert!(toml::from_str::<GameConfig>("shapes = [[[0, 0]]]\n").is_err());
    }
}
