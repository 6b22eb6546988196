// #![deny(missing_docs)]

//! Shrink images by removing low-energy vertical seams.
//!
//! Each pass converts the working image to luminance, estimates the
//! luminance gradient with Sobel kernels, accumulates the cheapest
//! top-to-bottom path cost for every pixel, traces one seam back up
//! from the bottom row, and squeezes it out of the image in place.

pub mod carver;
pub mod config;
pub mod cost;
pub mod driver;
pub mod dump;
pub mod error;
pub mod gradient;
pub mod grid;
pub mod io;
pub mod luminance;
pub mod pixels;
mod rows;
pub mod seam;

pub use carver::{CarveReport, SeamCarver, Target};
pub use config::Config;
pub use cost::accumulate_cost;
pub use driver::{run_interactive, FrameSequence, RenderSurface};
pub use error::{Error, Result};
pub use gradient::gradient;
pub use grid::{CostTable, EnergyMap, Grid};
pub use luminance::luminance;
pub use pixels::PixelBuffer;
pub use seam::{trace_seam, GradientSeams, Seam, SeamFinder, SeamStart};
