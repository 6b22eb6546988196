// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Run configuration.

use crate::carver::Target;
use crate::seam::SeamStart;
use std::path::{Path, PathBuf};

/// One carving run, as requested on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub target: Target,
    pub start: SeamStart,
    /// Write `lum.png` and `grad.png` for the unmodified image here.
    pub dump_energy: Option<PathBuf>,
    /// Drive the carve frame by frame, saving each frame here.
    pub frames: Option<PathBuf>,
}

impl Config {
    /// Remove one seam from `input` and write `<stem>-carved.png`
    /// beside it.
    pub fn new<Q: AsRef<Path>>(input: Q) -> Self {
        let input = input.as_ref().to_path_buf();
        Config {
            output: default_output(&input),
            input,
            target: Target::Seams(1),
            start: SeamStart::MinimumCost,
            dump_energy: None,
            frames: None,
        }
    }
}

/// `dir/photo.jpg` becomes `dir/photo-carved.png`.
pub fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{}-carved.png", stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_sits_beside_input() {
        assert_eq!(
            default_output(Path::new("shots/tower.jpg")),
            PathBuf::from("shots/tower-carved.png")
        );
        assert_eq!(
            default_output(Path::new("tower")),
            PathBuf::from("tower-carved.png")
        );
    }

    #[test]
    fn defaults_remove_one_seam() {
        let config = Config::new("a.png");
        assert_eq!(config.target, Target::Seams(1));
        assert_eq!(config.start, SeamStart::MinimumCost);
        assert_eq!(config.output, PathBuf::from("a-carved.png"));
    }
}
