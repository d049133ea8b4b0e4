use std::fmt;
use std::path::{Path, PathBuf};

/// Reference to an image file on disk. Passed between picker, cropper,
/// classifier and presenter instead of decoded pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(pub PathBuf);

impl ImageRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
