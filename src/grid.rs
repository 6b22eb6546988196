// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Two-dimensional scalar fields
//!
//! Every intermediate product of a carving pass (the luminance map,
//! the gradient map, and the accumulated seam costs) is a dense,
//! row-major grid of floats exactly as wide as the pixel buffer was
//! when the pass began.  They are built fresh every pass and thrown
//! away once the next stage has consumed them.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field.  The content type must
/// implement Default so that a fresh grid can be allocated before its
/// cells are computed.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

/// A per-pixel scalar field: luminance or gradient magnitude.
pub type EnergyMap = Grid<f32>;

/// The cumulative minimal energy to reach each pixel from the top row.
pub type CostTable = Grid<f32>;

impl<P: Default + Copy> Grid<P> {
    /// Allocate a grid with every cell at its default value.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  Returns None if the vector
    /// does not hold exactly `width * height` cells.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }
        Some(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The whole field, row-major.
    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.cells
    }

    /// One full row of the field.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    // Keep the index math in one place and nowhere else.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Grid<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Grid<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_addressed_row_major() {
        let grid = Grid::from_vec(3, 2, vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(grid.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(grid.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(grid[(2, 0)], 3.0);
        assert_eq!(grid[(0, 1)], 4.0);
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        assert!(Grid::from_vec(3, 2, vec![0.0f32; 5]).is_none());
    }

    #[test]
    fn index_mut_writes_one_cell() {
        let mut grid: Grid<u32> = Grid::new(2, 2);
        grid[(1, 1)] = 7;
        assert_eq!(grid.as_slice(), &[0, 0, 0, 7]);
    }
}
