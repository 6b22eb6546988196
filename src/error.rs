// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving.

use failure::Fail;

/// The library's error type.  Decoding and encoding failures are fatal
/// to a run; `DegenerateGeometry` is the carver telling its driver that
/// there is nothing left to remove.
#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "could not load image {}", path)]
    Load {
        path: String,
        #[cause]
        cause: image::ImageError,
    },

    #[fail(display = "could not write image {}", path)]
    Write {
        path: String,
        #[cause]
        cause: image::ImageError,
    },

    #[fail(display = "cannot remove a seam from an image {} pixel(s) wide", width)]
    DegenerateGeometry { width: u32 },

    #[fail(
        display = "seam does not fit a {}x{} buffer: {}",
        width, height, reason
    )]
    InvalidSeam {
        width: u32,
        height: u32,
        reason: &'static str,
    },

    #[fail(
        display = "target width {} is not in 1..={} for this image",
        target, width
    )]
    InvalidTarget { target: u32, width: u32 },

    #[fail(display = "{}", _0)]
    Io(#[cause] std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type for every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, Error>;
