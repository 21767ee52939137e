//! Version stamp for exported catalog documents.

use std::fmt;

use serde::{Deserialize, Serialize};

/// `major.minor.patch` version of an exported document layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Bumped when fields are removed or change meaning.
    pub major: u32,
    /// Bumped when fields are added.
    pub minor: u32,
    /// Bumped for fixes that keep the layout.
    pub patch: u32,
}

impl SchemaVersion {
    /// Builds a version; usable in constants.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
