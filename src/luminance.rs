// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Convert the working image to a brightness map
//!
//! Luminance is the fixed-weight sum `0.299 r + 0.587 g + 0.114 b`
//! over channels normalized to [0, 1].  Alpha does not participate.

use crate::grid::EnergyMap;
use crate::pixels::PixelBuffer;
use crate::rows::fill_rows;
use image::Rgba;

const RED_WEIGHT: f64 = 0.299;
const GREEN_WEIGHT: f64 = 0.587;
const BLUE_WEIGHT: f64 = 0.114;

/// The brightness of one texel, in [0, 1].
#[inline]
pub fn rgb_to_luminance(pixel: Rgba<u8>) -> f32 {
    let [r, g, b, _] = pixel.0;
    let channel = |c: u8| f64::from(c) / 255.0;
    (RED_WEIGHT * channel(r) + GREEN_WEIGHT * channel(g) + BLUE_WEIGHT * channel(b)) as f32
}

/// Compute the brightness of every live pixel.  The map has the
/// buffer's current width and height.
pub fn luminance(pixels: &PixelBuffer) -> EnergyMap {
    let (width, height) = pixels.dimensions();
    fill_rows(width, height, |y, out| {
        for (cell, &texel) in out.iter_mut().zip(pixels.row(y)) {
            *cell = rgb_to_luminance(texel);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_is_one_and_black_is_zero() {
        assert!((rgb_to_luminance(Rgba([255, 255, 255, 255])) - 1.0).abs() < std::f32::EPSILON);
        assert_eq!(rgb_to_luminance(Rgba([0, 0, 0, 0])), 0.0);
    }

    #[test]
    fn alpha_is_ignored() {
        assert_eq!(
            rgb_to_luminance(Rgba([12, 200, 99, 0])),
            rgb_to_luminance(Rgba([12, 200, 99, 255]))
        );
    }

    #[test]
    fn formula_matches_samples() {
        for &(r, g, b) in &[(255u8, 0u8, 0u8), (0, 255, 0), (0, 0, 255), (17, 128, 240)] {
            let expected = 0.299 * (r as f64 / 255.0)
                + 0.587 * (g as f64 / 255.0)
                + 0.114 * (b as f64 / 255.0);
            let got = rgb_to_luminance(Rgba([r, g, b, 255]));
            assert!((got as f64 - expected).abs() < 1e-6, "{} vs {}", got, expected);
        }
    }

    #[test]
    fn map_has_buffer_shape() {
        let texels = vec![
            Rgba([255, 255, 255, 255]),
            Rgba([0, 0, 0, 255]),
            Rgba([255, 0, 0, 255]),
            Rgba([0, 0, 255, 255]),
            Rgba([0, 255, 0, 255]),
            Rgba([0, 0, 0, 255]),
        ];
        let buf = PixelBuffer::from_texels(3, 2, texels).unwrap();
        let lum = luminance(&buf);
        assert_eq!((lum.width(), lum.height()), (3, 2));
        assert_eq!(lum[(1, 0)], 0.0);
        assert_eq!(lum[(2, 0)], rgb_to_luminance(Rgba([255, 0, 0, 255])));
        assert_eq!(lum[(1, 1)], rgb_to_luminance(Rgba([0, 255, 0, 255])));
    }

    #[test]
    fn single_pixel_image() {
        let buf = PixelBuffer::filled(1, 1, Rgba([0, 255, 0, 255]));
        let lum = luminance(&buf);
        assert_eq!(lum.as_slice().len(), 1);
    }
}
