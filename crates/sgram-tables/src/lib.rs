#![deny(missing_docs)]
#![doc = "Literal sequence tables and cycle data for the five N-Gram families, \
reachable through an enum-keyed registry."]

mod cubic;
mod linear;
mod quadratic;
mod rooted;
mod unlabeled;

use std::ops::Range;

use sgram_core::{Family, NGram, SequenceFamily, SgramError};

pub use cubic::Cubic;
pub use linear::Linear;
pub use quadratic::Quadratic;
pub use rooted::{RootedTrees, A000081};
pub use unlabeled::{UnlabeledTrees, A000055};

/// Default half-open index range used by listings.
pub const DEFAULT_RANGE: Range<usize> = 0..12;

/// Returns the implementation backing `family`.
pub fn family_impl(family: Family) -> &'static dyn SequenceFamily {
    match family {
        Family::Linear => &Linear,
        Family::Quadratic => &Quadratic,
        Family::Cubic => &Cubic,
        Family::RootedTrees => &RootedTrees,
        Family::UnlabeledTrees => &UnlabeledTrees,
    }
}

/// Sequence value of `family` at `index`.
pub fn compute_value(family: Family, index: usize) -> Result<u64, SgramError> {
    family_impl(family).compute_value(index)
}

/// Builds the entry of `family` at `index`.
pub fn create(family: Family, index: usize) -> Result<NGram, SgramError> {
    family_impl(family).create(index)
}

/// Builds every entry in `range`, clamped to the family domain.
pub fn create_range(family: Family, range: Range<usize>) -> Result<Vec<NGram>, SgramError> {
    let end = range.end.min(family.max_index() + 1);
    tracing::debug!(family = family.key(), start = range.start, end, "building range");
    (range.start..end)
        .map(|index| create(family, index))
        .collect()
}

/// Builds every entry of the family's domain.
pub fn create_all(family: Family) -> Result<Vec<NGram>, SgramError> {
    create_range(family, 0..family.max_index() + 1)
}

pub(crate) fn sequential(count: u64) -> Vec<u64> {
    (1..=count).collect()
}

pub(crate) fn overflow(family: Family, index: usize) -> SgramError {
    SgramError::index_out_of_range(family.key(), index, family.max_index())
        .with_context("reason", "closed form overflows u64")
}
