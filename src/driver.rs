// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Frame-driven carving
//!
//! In interactive use the carver does not own the loop: a display
//! surface does.  Once per frame the surface says how wide it is, and
//! if the image is wider than that the carver removes one seam and the
//! surface is handed the new pixels.  Closing the surface ends the run.

use crate::carver::SeamCarver;
use crate::error::Result;
use crate::io;
use crate::pixels::PixelBuffer;
use crate::seam::SeamFinder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Whatever is showing the image.
pub trait RenderSurface {
    /// Checked once at the top of every frame.
    fn should_close(&self) -> bool;

    /// The width the image should shrink to, read once per frame.
    fn target_width(&self) -> u32;

    /// Called with the current image whenever it changes, and once
    /// before the first frame.
    fn present(&mut self, pixels: &PixelBuffer) -> Result<()>;

    /// Block until the next frame is due.
    fn next_frame(&mut self);
}

/// Drive `carver` from `surface` until the surface closes.  At most
/// one seam is removed per frame.  Returns the number of seams removed.
pub fn run_interactive<F, S>(carver: &mut SeamCarver<F>, surface: &mut S) -> Result<u32>
where
    F: SeamFinder,
    S: RenderSurface,
{
    let mut removed = 0;
    surface.present(carver.pixels())?;
    while !surface.should_close() {
        if carver.can_carve() && carver.width() > surface.target_width() {
            carver.carve_once()?;
            removed += 1;
            surface.present(carver.pixels())?;
        }
        surface.next_frame();
    }
    debug!(removed, "surface closed");
    Ok(removed)
}

/// A headless surface that saves every presented frame as a numbered
/// PNG and closes once the image is as narrow as it is going to get.
#[derive(Debug)]
pub struct FrameSequence {
    dir: PathBuf,
    target: u32,
    frames: u32,
    width: Option<u32>,
}

impl FrameSequence {
    /// Frames go in `dir`, which is created if needed.
    pub fn new<Q: AsRef<Path>>(dir: Q, target: u32) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(FrameSequence {
            dir,
            target: target.max(1),
            frames: 0,
            width: None,
        })
    }

    /// How many frames have been written.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn frame_path(&self, frame: u32) -> PathBuf {
        self.dir.join(format!("frame-{:05}.png", frame))
    }
}

impl RenderSurface for FrameSequence {
    fn should_close(&self) -> bool {
        match self.width {
            Some(width) => width <= self.target,
            None => false,
        }
    }

    fn target_width(&self) -> u32 {
        self.target
    }

    fn present(&mut self, pixels: &PixelBuffer) -> Result<()> {
        io::save(self.frame_path(self.frames), pixels)?;
        self.frames += 1;
        self.width = Some(pixels.width());
        Ok(())
    }

    fn next_frame(&mut self) {}
}
