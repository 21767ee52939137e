#![deny(missing_docs)]
#![doc = "Core traits and data types for the N-Gram sequence catalog: families, \
validated cycles, pattern sets and catalog entries."]

/// Labelled circular state sequences.
pub mod cycle;
/// Catalog entries and quadratic notation.
pub mod entry;
pub mod errors;
pub mod family;
/// Per-index pattern sets with an explicit primary cycle.
pub mod patterns;
pub mod provenance;

pub use cycle::{CycleKind, NamedCycle};
pub use entry::{gcd, join_states, FormulaParts, NGram, SGramNotation};
pub use errors::{ErrorInfo, SgramError};
pub use family::{Family, POLYNOMIAL_MAX_INDEX, TABLE_MAX_INDEX};
pub use patterns::{PatternGroup, PatternSet, PatternSetBuilder};
pub use provenance::SchemaVersion;

/// Contract shared by the five sequence families.
///
/// Implementors provide the value computation, naming and cycle data for one
/// family; [`SequenceFamily::create`] assembles the immutable entry.
pub trait SequenceFamily: Send + Sync {
    /// Family implemented by this type.
    fn family(&self) -> Family;

    /// Symbolic name of the entry at `index`.
    fn symbol(&self, index: usize) -> String;

    /// Sequence value at `index`.
    fn compute_value(&self, index: usize) -> Result<u64, SgramError>;

    /// Rendered formula for the entry at `index` with the given value.
    fn formula(&self, index: usize, value: u64) -> String;

    /// Named integer parts of the formula.
    fn formula_parts(&self, index: usize, value: u64) -> FormulaParts;

    /// Cycles owned by the entry at `index`.
    fn patterns(&self, index: usize, value: u64) -> Result<PatternSet, SgramError>;

    /// Bracket notation, only meaningful for the quadratic family.
    fn notation(&self, _index: usize) -> Option<SGramNotation> {
        None
    }

    /// Builds the entry at `index`, enforcing the family's index domain.
    fn create(&self, index: usize) -> Result<NGram, SgramError> {
        let family = self.family();
        family.check_index(index)?;
        let value = self.compute_value(index)?;
        let patterns = self.patterns(index, value).map_err(|err| {
            err.with_context("family", family.key())
                .with_context("index", index)
        })?;
        tracing::debug!(
            family = family.key(),
            index,
            value,
            cycles = patterns.len(),
            "created entry"
        );
        Ok(NGram {
            family,
            index,
            value,
            symbol: self.symbol(index),
            formula: self.formula(index, value),
            formula_parts: self.formula_parts(index, value),
            notation: self.notation(index),
            patterns,
        })
    }
}
