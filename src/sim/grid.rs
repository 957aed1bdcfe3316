//! Static obstacle grid
//!
//! Cells are stored row-major in a fixed `height × width` store. Source rows
//! may be ragged; missing cells are open air.

use serde::{Deserialize, Serialize};

use super::actor::TouchKind;
use super::vector::Vector;

/// Terrain kinds attached to grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Obstacle {
    Wall,
    Lava,
}

impl Obstacle {
    /// Tag used by the contact rules
    pub fn touch_kind(self) -> TouchKind {
        match self {
            Obstacle::Wall => TouchKind::Wall,
            Obstacle::Lava => TouchKind::Lava,
        }
    }
}

/// Rectangular obstacle map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<Obstacle>>,
}

impl Grid {
    /// Build from rows of possibly unequal length. Width is the longest row.
    pub fn from_rows(rows: &[Vec<Option<Obstacle>>]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut cells = vec![None; width * height];
        for (y, row) in rows.iter().enumerate() {
            cells[y * width..y * width + row.len()].copy_from_slice(row);
        }

        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell contents; anything outside the store is open air
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Obstacle> {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            None
        }
    }

    /// Classify a hypothetical box at `pos` with `size` against the terrain.
    ///
    /// The left, top and right world edges act as walls; falling below the
    /// bottom edge is lava. Inside the world, the first occupied cell in the
    /// box footprint wins, scanning columns outer and rows inner.
    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle> {
        let left = pos.x;
        let right = pos.x + size.x;
        let top = pos.y;
        let bottom = pos.y + size.y;

        if top < 0.0 || left < 0.0 || right > self.width as f32 {
            return Some(Obstacle::Wall);
        }
        if bottom > self.height as f32 {
            return Some(Obstacle::Lava);
        }

        let x_start = left.floor() as usize;
        let x_end = right.ceil() as usize;
        let y_start = top.floor() as usize;
        let y_end = bottom.ceil() as usize;

        for x in x_start..x_end {
            for y in y_start..y_end {
                if let Some(obstacle) = self.get(x, y) {
                    return Some(obstacle);
                }
            }
        }
        None
    }
}
