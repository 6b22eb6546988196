// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Row-wise evaluation of per-pixel stages
//!
//! The luminance and gradient stages are pure per output cell, so they
//! are written as "fill this output row" closures.  Sequentially that
//! is just a loop.  With the `threaded` feature the output is broken
//! into contiguous bands of rows with `chunks_mut`, and each band is
//! filled on its own scoped thread.  Either way every cell is computed
//! by the same closure with the same arithmetic, so the two builds
//! produce identical maps.

use crate::grid::EnergyMap;

/// Build a `width` x `height` map by calling `fill(y, row)` for every
/// output row.
#[cfg(not(feature = "threaded"))]
pub(crate) fn fill_rows<F>(width: u32, height: u32, fill: F) -> EnergyMap
where
    F: Fn(u32, &mut [f32]) + Sync,
{
    let mut out = EnergyMap::new(width, height);
    if width == 0 {
        return out;
    }
    out.as_mut_slice()
        .chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| fill(y as u32, row));
    out
}

#[cfg(feature = "threaded")]
pub(crate) fn fill_rows<F>(width: u32, height: u32, fill: F) -> EnergyMap
where
    F: Fn(u32, &mut [f32]) + Sync,
{
    let mut out = EnergyMap::new(width, height);
    if width == 0 || height == 0 {
        return out;
    }

    let bands = num_cpus::get().max(1).min(height as usize);
    let rows_per_band = (height as usize + bands - 1) / bands;
    let band_len = rows_per_band * width as usize;
    let fill = &fill;

    let result = crossbeam::scope(|scope| {
        for (band, chunk) in out.as_mut_slice().chunks_mut(band_len).enumerate() {
            scope.spawn(move |_| {
                let first = band * rows_per_band;
                for (offset, row) in chunk.chunks_mut(width as usize).enumerate() {
                    fill((first + offset) as u32, row);
                }
            });
        }
    });
    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
    out
}
