use serde::{Deserialize, Serialize};

use crate::dimensions::WorldDimensions;
use crate::grid::GridDescription;

/// Layout character for a floor cell.
pub const FLOOR_CHAR: char = '.';
/// Layout character for a solid cell.
pub const SOLID_CHAR: char = '#';

/// Errors from loading a level layout.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("level layout has no rows")]
    Empty,
    #[error("row {row} is {actual} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unknown cell character {ch:?} at ({x}, {y})")]
    UnknownCell { ch: char, x: usize, y: usize },
    #[error("{name} must be a positive number, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn default_wall_material() -> String {
    "wall".into()
}

fn default_floor_material() -> String {
    "floor".into()
}

/// A level described as text rows plus world sizing, as stored in YAML files.
///
/// Row index is grid Y and column index is grid X; `.` marks floor and `#`
/// marks solid rock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub horizontal_size: f32,
    pub ceiling_height: f32,
    #[serde(default = "default_wall_material")]
    pub wall_material: String,
    #[serde(default = "default_floor_material")]
    pub floor_material: String,
    pub rows: Vec<String>,
}

impl LevelLayout {
    /// Parse a layout from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, GridError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Serialize the layout back to YAML.
    pub fn to_yaml(&self) -> Result<String, GridError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Build the occupancy grid described by `rows`.
    pub fn to_grid(&self) -> Result<GridDescription, GridError> {
        Self::parse_rows(&self.rows)
    }

    /// Validated world sizing.
    pub fn dimensions(&self) -> Result<WorldDimensions, GridError> {
        for (name, value) in [
            ("horizontal_size", self.horizontal_size),
            ("ceiling_height", self.ceiling_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GridError::InvalidDimension { name, value });
            }
        }
        Ok(WorldDimensions::new(self.horizontal_size, self.ceiling_height))
    }

    /// Parse text rows into a grid. Every row must have the same width.
    pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<GridDescription, GridError> {
        let width = match rows.first() {
            Some(first) => first.as_ref().chars().count(),
            None => return Err(GridError::Empty),
        };
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut grid = GridDescription::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let actual = row.chars().count();
            if actual != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    actual,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                match ch {
                    FLOOR_CHAR => grid.set_floor(x, y),
                    SOLID_CHAR => {}
                    _ => return Err(GridError::UnknownCell { ch, x, y }),
                }
            }
        }

        tracing::debug!(
            width,
            height = rows.len(),
            floors = grid.floor_count(),
            "parsed level layout"
        );
        Ok(grid)
    }
}
