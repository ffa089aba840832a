//! Location of the bundled reference list.

use crate::constants::REFERENCE_PATH;
use crate::error::MediaTypeError;
use crate::registry::MediaTypeList;
use std::path::PathBuf;

/// Copy of `data/media_types.json` as it was at compile time.
pub const BUNDLED_MEDIA_TYPES: &[u8] = include_bytes!("../data/media_types.json");

/// Path of the tracked reference file inside the package tree.
pub fn reference_path() -> PathBuf {
    PathBuf::from(REFERENCE_PATH)
}

impl MediaTypeList {
    /// The compiled-in reference list.
    pub fn bundled() -> Result<Self, MediaTypeError> {
        Self::from_json(BUNDLED_MEDIA_TYPES)
    }
}
