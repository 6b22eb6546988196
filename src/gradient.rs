// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the magnitude of the luminance gradient
//! at that pixel, estimated with the two Sobel kernels below.  Near
//! the border, taps that would land outside the image are skipped
//! entirely: there is no padding, clamping, or reflection.  That means
//! a border pixel of a perfectly flat, non-black image still carries
//! energy (the missing taps never cancel the ones that remain), and
//! that is the behavior seams are expected to route around.

use crate::grid::EnergyMap;
use crate::rows::fill_rows;

/// Horizontal derivative, indexed `[dy + 1][dx + 1]`.
pub const KERNEL_X: [[f32; 3]; 3] = [[1.0, 0.0, -1.0], [2.0, 0.0, -2.0], [1.0, 0.0, -1.0]];

/// Vertical derivative, indexed `[dy + 1][dx + 1]`.
pub const KERNEL_Y: [[f32; 3]; 3] = [[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]];

// The in-range slice of the window [c - 1, c + 1] along one axis, as
// (first offset, last offset).
#[inline]
fn taps(c: u32, len: u32) -> (i64, i64) {
    let first = if c == 0 { 0 } else { -1 };
    let last = if c + 1 >= len { 0 } else { 1 };
    (first, last)
}

/// The gradient magnitude at a single pixel.
pub fn gradient_at(lum: &EnergyMap, x: u32, y: u32) -> f32 {
    let (width, height) = (lum.width(), lum.height());
    let (dy0, dy1) = taps(y, height);
    let (dx0, dx1) = taps(x, width);

    let mut gx = 0.0f32;
    let mut gy = 0.0f32;
    for dy in dy0..=dy1 {
        let row = lum.row((y as i64 + dy) as u32);
        let (kx, ky) = (&KERNEL_X[(dy + 1) as usize], &KERNEL_Y[(dy + 1) as usize]);
        for dx in dx0..=dx1 {
            let v = row[(x as i64 + dx) as usize];
            gx += v * kx[(dx + 1) as usize];
            gy += v * ky[(dx + 1) as usize];
        }
    }
    (gx * gx + gy * gy).sqrt()
}

/// Compute the gradient energy map of a luminance map.  The result
/// has the same shape as its input.
pub fn gradient(lum: &EnergyMap) -> EnergyMap {
    fill_rows(lum.width(), lum.height(), |y, out| {
        for (x, cell) in out.iter_mut().enumerate() {
            *cell = gradient_at(lum, x as u32, y);
        }
    })
}
