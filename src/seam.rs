// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Trace a seam through a cost table
//!
//! A seam is read off the cost table from the bottom up: pick a column
//! in the last row, then repeatedly step to whichever of the three
//! cells above is cheapest, until the top row is reached.

use crate::cost::accumulate_cost;
use crate::gradient::gradient;
use crate::grid::{CostTable, EnergyMap};
use crate::luminance::luminance;
use crate::pixels::PixelBuffer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A vertical seam: one column index per row, top to bottom, with
/// adjacent entries never more than one column apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam(Vec<u32>);

impl Seam {
    pub fn new(columns: Vec<u32>) -> Self {
        Seam(columns)
    }

    pub fn columns(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every step between adjacent rows moves at most one
    /// column and every column is below `width`.
    pub fn is_connected(&self, width: u32) -> bool {
        self.0.iter().all(|&x| x < width)
            && self
                .0
                .windows(2)
                .all(|pair| (i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1)
    }
}

/// How the bottom end of a seam is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeamStart {
    /// The cheapest column of the last row, leftmost on ties.
    MinimumCost,
    /// A uniformly random column of the last row.  The upward walk is
    /// still greedy, so the seam is only locally cheap.
    Random { seed: u64 },
}

impl Default for SeamStart {
    fn default() -> Self {
        SeamStart::MinimumCost
    }
}

/// The leftmost cheapest column of a row.
fn cheapest_column(row: &[f32]) -> u32 {
    row.iter()
        .enumerate()
        .fold((0, std::f32::INFINITY), |best, (x, &c)| {
            if c < best.1 {
                (x, c)
            } else {
                best
            }
        })
        .0 as u32
}

/// Walk a cost table upward from column `start` of the last row.
///
/// At each step the walk starts out planning to go straight up, then
/// considers the upper-left cell and then the upper-right cell, and
/// each of those replaces the plan only if it is strictly cheaper than
/// the plan so far.
pub fn trace_from(cost: &CostTable, start: u32) -> Seam {
    let (width, height) = (cost.width(), cost.height());
    let mut columns = vec![0u32; height as usize];
    if height == 0 {
        return Seam(columns);
    }

    let mut x = start;
    columns[height as usize - 1] = x;
    for y in (0..height - 1).rev() {
        let above = cost.row(y);
        let mut next = x;
        if x > 0 && above[x as usize - 1] < above[next as usize] {
            next = x - 1;
        }
        if x + 1 < width && above[x as usize + 1] < above[next as usize] {
            next = x + 1;
        }
        x = next;
        columns[y as usize] = x;
    }
    Seam(columns)
}

/// Choose the starting column for `policy` and trace the seam.  The
/// table must be at least one pixel wide.
pub fn trace_seam<R: Rng>(cost: &CostTable, policy: SeamStart, rng: &mut R) -> Seam {
    let last = cost.height().saturating_sub(1);
    let start = match policy {
        SeamStart::MinimumCost => cheapest_column(cost.row(last)),
        SeamStart::Random { .. } => rng.gen_range(0..cost.width()),
    };
    trace_from(cost, start)
}

/// Everything a single carving pass computes, kept together for
/// callers that want to look at the intermediate maps.
#[derive(Debug)]
pub struct SeamSearch {
    pub luminance: EnergyMap,
    pub energy: EnergyMap,
    pub cost: CostTable,
    pub seam: Seam,
}

/// This trait defines how we get seams out of an image.  It's a
/// primitive interface, just enough to make room for more than one
/// seam picker behind the carver.
pub trait SeamFinder {
    /// Given the current pixels, find the next vertical seam to
    /// remove.  The buffer must be at least one pixel wide.
    fn find_vertical_seam(&mut self, pixels: &PixelBuffer) -> SeamSearch;
}

/// Luminance gradient energy, accumulated top-down, traced bottom-up.
#[derive(Debug)]
pub struct GradientSeams {
    start: SeamStart,
    rng: StdRng,
}

impl GradientSeams {
    pub fn new(start: SeamStart) -> Self {
        let seed = match start {
            SeamStart::Random { seed } => seed,
            SeamStart::MinimumCost => 0,
        };
        GradientSeams {
            start,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn start(&self) -> SeamStart {
        self.start
    }
}

impl Default for GradientSeams {
    fn default() -> Self {
        GradientSeams::new(SeamStart::default())
    }
}

impl SeamFinder for GradientSeams {
    fn find_vertical_seam(&mut self, pixels: &PixelBuffer) -> SeamSearch {
        let luminance = luminance(pixels);
        let energy = gradient(&luminance);
        let cost = accumulate_cost(&energy);
        let seam = trace_seam(&cost, self.start, &mut self.rng);
        SeamSearch {
            luminance,
            energy,
            cost,
            seam,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use image::Rgba;

    #[rustfmt::skip]
    const COSTS: [f32; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0,
        9.0, 1.0, 9.0, 8.0, 9.0,
        9.0, 9.0, 9.0, 9.0, 0.0,
        9.0, 9.0, 9.0, 0.0, 9.0,
    ];

    fn table() -> CostTable {
        Grid::from_vec(5, 4, COSTS.to_vec()).unwrap()
    }

    #[test]
    fn minimum_start_traces_upward() {
        let mut rng = StdRng::seed_from_u64(0);
        let seam = trace_seam(&table(), SeamStart::MinimumCost, &mut rng);
        assert_eq!(seam.columns(), &[2, 3, 4, 3]);
        assert!(seam.is_connected(5));
    }

    #[test]
    fn left_wins_a_tie_below_straight_up() {
        let cost = Grid::from_vec(3, 2, vec![1.0, 5.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(trace_from(&cost, 1).columns(), &[0, 1]);
    }

    #[test]
    fn right_overrides_when_strictly_cheaper() {
        let cost = Grid::from_vec(3, 2, vec![2.0, 5.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(trace_from(&cost, 1).columns(), &[2, 1]);
    }

    #[test]
    fn straight_up_wins_ties_with_neighbors() {
        let cost = Grid::from_vec(3, 2, vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(trace_from(&cost, 1).columns(), &[1, 1]);
    }

    #[test]
    fn bottom_row_ties_pick_leftmost() {
        let cost = Grid::from_vec(4, 1, vec![3.0, 1.0, 1.0, 2.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(trace_seam(&cost, SeamStart::MinimumCost, &mut rng).columns(), &[1]);
    }

    #[test]
    fn random_start_is_seeded_and_in_range() {
        let cost = table();
        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            trace_seam(&cost, SeamStart::Random { seed }, &mut rng)
        };
        for seed in 0..32 {
            let seam = pick(seed);
            assert_eq!(seam.len(), 4);
            assert!(seam.is_connected(5));
            assert_eq!(seam, pick(seed));
        }
    }

    #[test]
    fn connectivity_check() {
        assert!(Seam::new(vec![0, 1, 2, 1]).is_connected(3));
        assert!(!Seam::new(vec![0, 2]).is_connected(3));
        assert!(!Seam::new(vec![3, 2]).is_connected(3));
    }

    #[test]
    fn finder_produces_matching_shapes() {
        let texels = (0..24u8).map(|v| Rgba([v * 10, v * 5, 255 - v, 255])).collect();
        let buf = PixelBuffer::from_texels(6, 4, texels).unwrap();
        let mut finder = GradientSeams::default();
        let search = finder.find_vertical_seam(&buf);
        for map in &[&search.luminance, &search.energy, &search.cost] {
            assert_eq!((map.width(), map.height()), (6, 4));
        }
        assert_eq!(search.seam.len(), 4);
        assert!(search.seam.is_connected(6));
    }
}
