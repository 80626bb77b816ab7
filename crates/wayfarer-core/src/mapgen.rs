//! Patch-based terrain generation.
//!
//! A patch stamps one terrain kind over a randomly sized region. Regular
//! patches are clean rectangles; irregular patches re-roll the width and the
//! start column of every row, which produces jagged blobs. Later patches
//! overwrite earlier ones.

use rand::{Rng, RngExt};

use crate::geom::{Point, Range};
use crate::grid::Grid;
use crate::tile::{self, Tile};

/// How many patches to stamp and how big each may be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchSpec {
    pub count: u32,
    pub min_size: i32,
    pub max_size: i32,
}

impl PatchSpec {
    pub const fn new(count: u32, min_size: i32, max_size: i32) -> Self {
        Self {
            count,
            min_size,
            max_size,
        }
    }
}

/// Patches applied to a fresh plains grid, in order.
pub const DEFAULT_LAYOUT: [(Tile, PatchSpec); 5] = [
    (&tile::FOREST, PatchSpec::new(3, 3, 7)),
    (&tile::PINES, PatchSpec::new(3, 3, 7)),
    (&tile::MOUNTAIN, PatchSpec::new(3, 3, 7)),
    (&tile::WATER, PatchSpec::new(2, 3, 10)),
    (&tile::TOWN, PatchSpec::new(1, 3, 3)),
];

/// Patch generator operating on a terrain [`Grid`].
pub struct PatchGen<'a, R: Rng> {
    pub rng: &'a mut R,
    pub grid: &'a mut Grid<Tile>,
    /// Jagged rows (the default) or clean rectangles.
    pub irregular: bool,
}

impl<'a, R: Rng> PatchGen<'a, R> {
    pub fn new(grid: &'a mut Grid<Tile>, rng: &'a mut R) -> Self {
        Self {
            rng,
            grid,
            irregular: true,
        }
    }

    /// Set whether patches are irregular (builder).
    pub fn with_irregular(mut self, irregular: bool) -> Self {
        self.irregular = irregular;
        self
    }

    /// Stamp `spec.count` patches of `tile`. Returns every stamped point, in
    /// stamping order (points may repeat when patches overlap).
    ///
    /// Patches stay inside the grid interior: a one-cell margin on every
    /// edge is never touched. Grids too small to have an interior get no
    /// patches.
    pub fn patch(&mut self, tile: Tile, spec: PatchSpec) -> Vec<Point> {
        let interior = self.grid.bounds().inset(1);
        let mut stamped = Vec::new();
        if interior.is_empty() {
            return stamped;
        }

        let min_size = spec.min_size.max(1);
        let max_size = spec.max_size.max(min_size);
        let width = self.grid.width();
        let height = self.grid.height();

        for _ in 0..spec.count {
            let size_y = self.rng.random_range(min_size..=max_size).min(interior.height());
            let size_x = self.rng.random_range(min_size..=max_size).min(interior.width());
            let start_y = self.rng.random_range(1..=height - size_y - 1);
            let start_x = self.rng.random_range(1..=width - size_x - 1);

            if self.irregular {
                self.stamp_irregular(tile, start_y, size_y, max_size, interior, &mut stamped);
            } else {
                let region = Range::new(start_x, start_y, start_x + size_x, start_y + size_y);
                for p in region {
                    self.grid.set(p, tile);
                    stamped.push(p);
                }
            }
        }
        stamped
    }

    /// One jagged patch: every row picks its own width in
    /// `[0.7 * max, max]` and starts 1–2 cells left of a per-patch anchor.
    fn stamp_irregular(
        &mut self,
        tile: Tile,
        start_y: i32,
        size_y: i32,
        max_size: i32,
        interior: Range,
        stamped: &mut Vec<Point>,
    ) {
        let max_w = max_size.min(interior.width());
        let min_w = ((max_w as f64) * 0.7) as i32;
        let anchor_hi = (self.grid.width() - max_w).max(3);
        let anchor = self.rng.random_range(3..=anchor_hi);

        for y in start_y..start_y + size_y {
            let row_w = self.rng.random_range(min_w..=max_w);
            let row_x = anchor - self.rng.random_range(1..=2);
            let row = Range::new(row_x, y, row_x + row_w, y + 1);
            for p in row.iter().filter(|p| interior.contains(*p)) {
                self.grid.set(p, tile);
                stamped.push(p);
            }
        }
    }
}
