// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reading and writing images on disk.

use crate::error::{Error, Result};
use crate::pixels::PixelBuffer;
use std::path::Path;
use tracing::info;

/// Decode any format the `image` crate understands into RGBA8.
pub fn load<Q: AsRef<Path>>(path: Q) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let image = image::open(path)
        .map_err(|cause| Error::Load {
            path: path.display().to_string(),
            cause,
        })?
        .to_rgba8();
    let (width, height) = image.dimensions();
    info!(path = %path.display(), width, height, "loaded image");
    Ok(PixelBuffer::from_image(&image))
}

/// Encode the live region of `pixels`; the format follows the file
/// extension.
pub fn save<Q: AsRef<Path>>(path: Q, pixels: &PixelBuffer) -> Result<()> {
    let path = path.as_ref();
    pixels.to_image().save(path).map_err(|cause| Error::Write {
        path: path.display().to_string(),
        cause,
    })?;
    info!(
        path = %path.display(),
        width = pixels.width(),
        height = pixels.height(),
        "wrote image"
    );
    Ok(())
}
