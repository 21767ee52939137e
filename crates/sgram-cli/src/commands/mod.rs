use std::ops::Range;

use sgram_core::Family;

use crate::config::CliConfig;

pub mod compare;
pub mod export;
pub mod show;
pub mod summary;
pub mod trace;
pub mod transition;
pub mod types;

/// Resolved global options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    /// Selected family.
    pub family: Family,
    /// Loaded configuration.
    pub config: CliConfig,
}

impl Context {
    /// Configured index range, clamped to the family domain.
    pub fn range(&self) -> Range<usize> {
        self.config.range.clamped(self.family)
    }
}
