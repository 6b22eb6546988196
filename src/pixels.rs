// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The shrinking pixel buffer
//!
//! The working image is held as a single vector of RGBA texels sized
//! for the original image.  Carving never reallocates: each removed
//! seam drops the logical width by one and packs the surviving rows
//! against each other at the front of the vector, so that the live
//! image is always the first `width * height` texels, row-major, with
//! no gaps.  Everything past that prefix is stale.

use crate::error::{Error, Result};
use crate::seam::Seam;
use image::{Rgba, RgbaImage};

/// A row-major RGBA8 image whose logical width can only shrink.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    texels: Vec<Rgba<u8>>,
}

impl PixelBuffer {
    /// Wrap a row-major vector of texels.  Returns None if the vector
    /// does not hold exactly `width * height` texels.
    pub fn from_texels(width: u32, height: u32, texels: Vec<Rgba<u8>>) -> Option<Self> {
        if texels.len() != width as usize * height as usize {
            return None;
        }
        Some(PixelBuffer {
            width,
            height,
            texels,
        })
    }

    /// A buffer filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgba<u8>) -> Self {
        PixelBuffer {
            width,
            height,
            texels: vec![color; width as usize * height as usize],
        }
    }

    /// Take ownership of a decoded image's pixels.
    pub fn from_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        PixelBuffer {
            width,
            height,
            texels: image.pixels().copied().collect(),
        }
    }

    /// Copy the live region out into an image suitable for encoding.
    pub fn to_image(&self) -> RgbaImage {
        let raw = self.texels[..self.len()]
            .iter()
            .flat_map(|p| p.0.iter().copied())
            .collect();
        // The live prefix always holds exactly width * height texels.
        RgbaImage::from_raw(self.width, self.height, raw)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }

    /// Current logical width.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The number of texels the backing store can hold, which is the
    /// size of the image before any carving.
    pub fn capacity(&self) -> usize {
        self.texels.len()
    }

    fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The live image, row-major, exactly `width * height` texels long.
    pub fn as_slice(&self) -> &[Rgba<u8>] {
        &self.texels[..self.len()]
    }

    /// One live row.
    pub fn row(&self, y: u32) -> &[Rgba<u8>] {
        let start = y as usize * self.width as usize;
        &self.texels[start..start + self.width as usize]
    }

    /// A single live texel.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        self.row(y)[x as usize]
    }

    /// Check that a seam can be removed without touching anything.
    fn check_seam(&self, seam: &Seam) -> Result<()> {
        if self.width <= 1 {
            return Err(Error::DegenerateGeometry { width: self.width });
        }
        let invalid = |reason| Error::InvalidSeam {
            width: self.width,
            height: self.height,
            reason,
        };
        if seam.len() != self.height as usize {
            return Err(invalid("one column per row is required"));
        }
        if seam.columns().iter().any(|&x| x >= self.width) {
            return Err(invalid("column out of range"));
        }
        Ok(())
    }

    /// Remove the pixel at `(seam[y], y)` from every row and close the
    /// gap.  The buffer is untouched if the seam is rejected.
    ///
    /// Row `y` starts at `y * width` before the removal and at
    /// `y * (width - 1)` after it.  Because the destination never runs
    /// ahead of the source, walking the rows top to bottom and moving
    /// the two surviving runs of each row with `copy_within` packs the
    /// whole image in one pass.
    pub fn remove_seam(&mut self, seam: &Seam) -> Result<()> {
        self.check_seam(seam)?;

        let width = self.width as usize;
        let narrowed = width - 1;
        for (y, &cut) in seam.columns().iter().enumerate() {
            let cut = cut as usize;
            let src = y * width;
            let dst = y * narrowed;
            self.texels.copy_within(src..src + cut, dst);
            self.texels
                .copy_within(src + cut + 1..src + width, dst + cut);
        }
        self.width -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: u8) -> Rgba<u8> {
        Rgba([v, v, v, 255])
    }

    // Every texel is unique: value = 10 * y + x.
    fn numbered(width: u32, height: u32) -> PixelBuffer {
        let texels = (0..height)
            .flat_map(|y| (0..width).map(move |x| gray((10 * y + x) as u8)))
            .collect();
        PixelBuffer::from_texels(width, height, texels).unwrap()
    }

    #[test]
    fn removal_compacts_every_row() {
        let mut buf = numbered(4, 3);
        let before: Vec<Vec<Rgba<u8>>> = (0..3).map(|y| buf.row(y).to_vec()).collect();
        let seam = Seam::new(vec![1, 2, 3]);

        buf.remove_seam(&seam).unwrap();

        assert_eq!(buf.dimensions(), (3, 3));
        for (y, old) in before.iter().enumerate() {
            let mut expected = old.clone();
            expected.remove(seam.columns()[y] as usize);
            assert_eq!(buf.row(y as u32), &expected[..]);
        }
    }

    #[test]
    fn removal_keeps_capacity() {
        let mut buf = numbered(5, 2);
        buf.remove_seam(&Seam::new(vec![0, 0])).unwrap();
        buf.remove_seam(&Seam::new(vec![3, 2])).unwrap();
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.capacity(), 10);
        assert_eq!(buf.as_slice().len(), 6);
        assert_eq!(buf.row(0), &[gray(1), gray(2), gray(3)]);
        assert_eq!(buf.row(1), &[gray(11), gray(12), gray(14)]);
    }

    #[test]
    fn floor_leaves_buffer_unchanged() {
        let mut buf = numbered(1, 3);
        let before = buf.as_slice().to_vec();
        match buf.remove_seam(&Seam::new(vec![0, 0, 0])) {
            Err(Error::DegenerateGeometry { width: 1 }) => {}
            other => panic!("expected degenerate geometry, got {:?}", other),
        }
        assert_eq!(buf.width(), 1);
        assert_eq!(buf.as_slice(), &before[..]);
    }

    #[test]
    fn bad_seams_are_rejected() {
        let mut buf = numbered(3, 2);
        assert!(buf.remove_seam(&Seam::new(vec![0])).is_err());
        assert!(buf.remove_seam(&Seam::new(vec![0, 3])).is_err());
        assert_eq!(buf.width(), 3);
    }

    #[test]
    fn image_round_trip_uses_live_region() {
        let mut buf = numbered(3, 2);
        buf.remove_seam(&Seam::new(vec![2, 2])).unwrap();
        let img = buf.to_image();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(*img.get_pixel(1, 1), gray(11));
        let back = PixelBuffer::from_image(&img);
        assert_eq!(back.as_slice(), buf.as_slice());
    }
}
