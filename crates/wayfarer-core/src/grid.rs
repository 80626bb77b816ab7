//! The [`Grid`] type: a 2D row-major grid of cells addressed by [`Point`].
//!
//! Unlike a shared-buffer view, a `Grid` owns its storage: cloning it yields an
//! independent copy. The map relies on this to keep the master terrain and the
//! per-turn working copy apart.

use crate::geom::{Point, Range};

/// A 2D grid of `T` values stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

impl<T: Clone> Grid<T> {
    /// Create a `width`×`height` grid filled with `value`. Negative
    /// dimensions are treated as zero.
    pub fn new(width: i32, height: i32, value: T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![value; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Copy all cells from a same-sized grid without reallocating.
    /// Grids of a different size are replaced wholesale.
    pub fn copy_from(&mut self, src: &Grid<T>) {
        if self.width == src.width && self.height == src.height {
            self.cells.clone_from_slice(&src.cells);
        } else {
            *self = src.clone();
        }
    }
}

impl<T> Grid<T> {
    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds().contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Set the cell at `p`. Returns `false` (and does nothing) if `p` is out
    /// of bounds.
    pub fn set(&mut self, p: Point, value: T) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() panics on 0; an empty grid has no rows anyway.
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Row-major iterator over `(Point, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.bounds().iter().zip(self.cells.iter())
    }

    /// Count cells satisfying a predicate.
    pub fn count(&self, mut f: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|c| f(c)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::new(10, 5, 0u8);
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.bounds().size(), Point::new(10, 5));
        assert_eq!(g.rows().count(), 5);
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4, 0);
        assert!(g.set(Point::new(2, 3), 42));
        assert_eq!(g.at(Point::new(2, 3)), Some(&42));
        assert_eq!(g.at(Point::new(0, 0)), Some(&0));
        assert_eq!(g.at(Point::new(4, 0)), None);
        assert!(!g.set(Point::new(-1, 0), 7));
    }

    #[test]
    fn clone_is_independent() {
        let mut a = Grid::new(3, 3, false);
        let b = a.clone();
        a.set(Point::new(1, 1), true);
        assert_eq!(b.at(Point::new(1, 1)), Some(&false));
    }

    #[test]
    fn copy_from_overwrites() {
        let mut a = Grid::new(3, 2, 'a');
        let mut b = Grid::new(3, 2, 'b');
        b.set(Point::new(2, 1), 'c');
        a.copy_from(&b);
        assert_eq!(a, b);
    }

    #[test]
    fn iter_and_count() {
        let mut g = Grid::new(3, 2, 0);
        g.set(Point::new(1, 0), 5);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Point::new(1, 0), &5));
        assert_eq!(g.count(|&c| c == 5), 1);
    }

    #[test]
    fn empty_grid_has_no_rows() {
        let g = Grid::new(0, 0, 1);
        assert_eq!(g.rows().count(), 0);
        assert_eq!(g.at(Point::ZERO), None);
    }
}
