// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Looking at energy maps
//!
//! None of this affects carving.  It reports the range of a map to the
//! log, and turns a map into a grayscale picture so the energy function
//! can be inspected by eye.

use crate::error::{Error, Result};
use crate::grid::EnergyMap;
use image::{GrayImage, Luma};
use itertools::{Itertools, MinMaxResult};
use num_traits::NumCast;
use std::path::Path;
use tracing::{debug, info};

/// The smallest and largest values in a map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f32,
    pub max: f32,
}

impl MinMax {
    /// None for an empty map.
    pub fn of(map: &EnergyMap) -> Option<Self> {
        match map.as_slice().iter().copied().minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(v) => Some(MinMax { min: v, max: v }),
            MinMaxResult::MinMax(min, max) => Some(MinMax { min, max }),
        }
    }
}

/// Report the range of a map at debug level.
pub fn log_range(name: &str, map: &EnergyMap) {
    if let Some(MinMax { min, max }) = MinMax::of(map) {
        debug!(map = name, min, max, "energy range");
    }
}

/// How map values become gray levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Values are already in [0, 1].
    Unit,
    /// Divide by the map's maximum first.  A map whose maximum is zero
    /// renders black.
    ToMax,
}

/// Render a map as an 8-bit grayscale image: each value is scaled to
/// [0, 1] and multiplied by 255, truncating.
pub fn energy_to_image(map: &EnergyMap, scale: Scale) -> GrayImage {
    let divisor = match (scale, MinMax::of(map)) {
        (Scale::ToMax, Some(MinMax { max, .. })) if max > 0.0 => max,
        _ => 1.0,
    };
    GrayImage::from_fn(map.width(), map.height(), |x, y| {
        let level = (map[(x, y)] / divisor * 255.0).max(0.0).min(255.0);
        Luma([<u8 as NumCast>::from(level).unwrap_or(0)])
    })
}

/// Write a map to `path` as a grayscale image.
pub fn write_energy_image<Q: AsRef<Path>>(path: Q, map: &EnergyMap, scale: Scale) -> Result<()> {
    let path = path.as_ref();
    energy_to_image(map, scale)
        .save(path)
        .map_err(|cause| Error::Write {
            path: path.display().to_string(),
            cause,
        })?;
    info!(path = %path.display(), "wrote energy map");
    Ok(())
}
