// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Accumulate seam costs
//!
//! The cost of a pixel is its own energy plus the cheapest of the (up
//! to) three pixels above it that a seam could have arrived from:
//!
//! ```text
//! cost(x, 0) = e(x, 0)
//! cost(x, y) = e(x, y) + min(cost(x-1, y-1), cost(x, y-1), cost(x+1, y-1))
//! ```
//!
//! Each row reads only the row above it, never its own.

use crate::grid::{CostTable, EnergyMap};

/// The cheapest of the in-range cells `x - 1`, `x`, `x + 1` of `row`.
/// Offsets are scanned left to right and the first minimum is kept
/// unless a later one is strictly smaller.
#[inline]
pub(crate) fn cheapest_parent(row: &[f32], x: usize) -> (usize, f32) {
    let first = x.saturating_sub(1);
    let last = (x + 1).min(row.len() - 1);
    let mut best = (first, row[first]);
    for (px, &cost) in row.iter().enumerate().take(last + 1).skip(first + 1) {
        if cost < best.1 {
            best = (px, cost);
        }
    }
    best
}

/// Build the cumulative cost table of a gradient energy map.  The
/// table has the same shape as the map.
pub fn accumulate_cost(energy: &EnergyMap) -> CostTable {
    let (width, height) = (energy.width(), energy.height());
    let mut table = CostTable::new(width, height);
    if width == 0 || height == 0 {
        return table;
    }

    let w = width as usize;
    let cells = table.as_mut_slice();
    cells[..w].copy_from_slice(energy.row(0));

    for y in 1..height {
        let (above, rest) = cells.split_at_mut(y as usize * w);
        let above = &above[(y as usize - 1) * w..];
        let current = &mut rest[..w];
        for (x, (cell, &e)) in current.iter_mut().zip(energy.row(y)).enumerate() {
            *cell = e + cheapest_parent(above, x).1;
        }
    }
    table
}
