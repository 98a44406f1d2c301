use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Configuration for the table the robot moves on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of columns (x ranges over `0..width`).
    pub width: i32,
    /// Number of rows (y ranges over `0..height`).
    pub height: i32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
        }
    }
}

/// The fixed rectangular surface. Origin `(0, 0)` is the bottom-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table {
    size: IVec2,
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        Self {
            size: IVec2::new(config.width, config.height),
        }
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Returns `true` if `cell` lies on the table.
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.cmpge(IVec2::ZERO).all() && cell.cmplt(self.size).all()
    }
}
