// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - the driver-facing orchestrator
//!
//! `SeamCarver` owns the working image and knows how to take exactly
//! one seam out of it.  Batch runs call `carve` with a target; the
//! interactive driver calls `carve_once` once per frame and reads the
//! result back through `pixels`.  Both are the same operation.

use crate::dump::log_range;
use crate::error::{Error, Result};
use crate::pixels::PixelBuffer;
use crate::seam::{GradientSeams, Seam, SeamFinder, SeamStart};
use tracing::{debug, info, warn};

/// When a carving run stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Remove this many seams.
    Seams(u32),
    /// Remove seams until the image is this wide.
    Width(u32),
}

impl Target {
    /// The width this target asks for, starting from `width`.  Never
    /// below the one-pixel floor.
    pub fn width_from(self, width: u32) -> u32 {
        match self {
            Target::Seams(n) => width.saturating_sub(n).max(1),
            Target::Width(w) => w.max(1),
        }
    }

    /// A width target must be reachable from `width` by narrowing.
    pub fn check(self, width: u32) -> Result<()> {
        match self {
            Target::Width(w) if w == 0 || w > width => {
                Err(Error::InvalidTarget { target: w, width })
            }
            _ => Ok(()),
        }
    }

    /// Whether stopping after `removed` seams fell short of the target
    /// because the image ran out of width.
    pub fn fell_short(self, removed: u32) -> bool {
        match self {
            Target::Seams(n) => removed < n,
            Target::Width(_) => false,
        }
    }
}

/// What a finished run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarveReport {
    pub seams_removed: u32,
    pub width: u32,
    pub height: u32,
    /// True if the run stopped at the one-pixel floor before reaching
    /// the requested target.
    pub hit_floor: bool,
}

/// A struct for holding the image being carved and the seam picker
/// that carves it.
pub struct SeamCarver<F: SeamFinder = GradientSeams> {
    pixels: PixelBuffer,
    finder: F,
    removed: u32,
}

impl SeamCarver<GradientSeams> {
    /// Carve `pixels` using gradient energy and the given start policy.
    pub fn new(pixels: PixelBuffer, start: SeamStart) -> Self {
        SeamCarver::with_finder(pixels, GradientSeams::new(start))
    }
}

impl<F: SeamFinder> SeamCarver<F> {
    pub fn with_finder(pixels: PixelBuffer, finder: F) -> Self {
        SeamCarver {
            pixels,
            finder,
            removed: 0,
        }
    }

    /// The current state of the image.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// How many seams have been removed so far.
    pub fn seams_removed(&self) -> u32 {
        self.removed
    }

    /// Whether another seam can be removed.
    pub fn can_carve(&self) -> bool {
        self.pixels.width() > 1 && self.pixels.height() > 0
    }

    /// Give the image back.
    pub fn into_pixels(self) -> PixelBuffer {
        self.pixels
    }

    /// Find and remove one seam, returning it.  At the floor this is
    /// `DegenerateGeometry` and the image is left as it was.
    pub fn carve_once(&mut self) -> Result<Seam> {
        if !self.can_carve() {
            return Err(Error::DegenerateGeometry {
                width: self.pixels.width(),
            });
        }

        let search = self.finder.find_vertical_seam(&self.pixels);
        log_range("luminance", &search.luminance);
        log_range("gradient", &search.energy);
        self.pixels.remove_seam(&search.seam)?;
        self.removed += 1;
        debug!(
            width = self.pixels.width(),
            removed = self.removed,
            "removed seam"
        );
        Ok(search.seam)
    }

    /// Carve until `target` is met or the image is one pixel wide.
    pub fn carve(&mut self, target: Target) -> Result<CarveReport> {
        target.check(self.pixels.width())?;
        let start = self.removed;
        let goal = target.width_from(self.pixels.width());

        while self.pixels.width() > goal {
            self.carve_once()?;
        }

        let seams_removed = self.removed - start;
        let hit_floor = target.fell_short(seams_removed);
        if hit_floor {
            warn!(
                requested = ?target,
                removed = seams_removed,
                "image reached one pixel wide; stopping early"
            );
        }
        info!(
            removed = seams_removed,
            width = self.pixels.width(),
            height = self.pixels.height(),
            "carving finished"
        );
        Ok(CarveReport {
            seams_removed,
            width: self.pixels.width(),
            height: self.pixels.height(),
            hit_floor,
        })
    }
}
