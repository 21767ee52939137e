//! The closed set of sequence families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SgramError};

/// Highest index of the polynomial families.
pub const POLYNOMIAL_MAX_INDEX: usize = 11;
/// Highest index of the literal tree-counting tables.
pub const TABLE_MAX_INDEX: usize = 20;

/// One of the five independent numeric sequence families.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Family {
    /// `N₁(n) = 1 + (1 + n)`.
    #[serde(rename = "1st")]
    Linear,
    /// `N₂(n) = 1 + (1 + n)²`, the S-Grams.
    #[default]
    #[serde(rename = "2nd")]
    Quadratic,
    /// `N₃(n) = 1 + (1 + n)³`.
    #[serde(rename = "3rd")]
    Cubic,
    /// Rooted trees with `n` nodes (OEIS A000081).
    #[serde(rename = "2d")]
    RootedTrees,
    /// Unlabeled trees with `n` nodes (OEIS A000055).
    #[serde(rename = "3d")]
    UnlabeledTrees,
}

impl Family {
    /// Every family in display order.
    pub const ALL: [Family; 5] = [
        Family::Linear,
        Family::Quadratic,
        Family::Cubic,
        Family::RootedTrees,
        Family::UnlabeledTrees,
    ];

    /// Short key used on the command line (`1st`, `2nd`, `3rd`, `2d`, `3d`).
    pub fn key(self) -> &'static str {
        match self {
            Family::Linear => "1st",
            Family::Quadratic => "2nd",
            Family::Cubic => "3rd",
            Family::RootedTrees => "2d",
            Family::UnlabeledTrees => "3d",
        }
    }

    /// Human readable description.
    pub fn description(self) -> &'static str {
        match self {
            Family::Linear => "1st Power (Linear)",
            Family::Quadratic => "2nd Power (S-Grams/Quadratic)",
            Family::Cubic => "3rd Power (Cubic)",
            Family::RootedTrees => "2D Catalan (Rooted Trees)",
            Family::UnlabeledTrees => "3D Catalan (Unlabeled Trees)",
        }
    }

    /// Whether values come from a closed-form polynomial.
    pub fn is_polynomial(self) -> bool {
        matches!(self, Family::Linear | Family::Quadratic | Family::Cubic)
    }

    /// OEIS identifier of the literal table backing the family, if any.
    pub fn oeis(self) -> Option<&'static str> {
        match self {
            Family::RootedTrees => Some("A000081"),
            Family::UnlabeledTrees => Some("A000055"),
            _ => None,
        }
    }

    /// Largest index for which entries can be constructed.
    pub fn max_index(self) -> usize {
        if self.is_polynomial() {
            POLYNOMIAL_MAX_INDEX
        } else {
            TABLE_MAX_INDEX
        }
    }

    /// Fails with `IndexOutOfRange` when `index` lies outside the family domain.
    pub fn check_index(self, index: usize) -> Result<(), SgramError> {
        if index > self.max_index() {
            return Err(SgramError::index_out_of_range(
                self.key(),
                index,
                self.max_index(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Family {
    type Err = SgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .into_iter()
            .find(|family| family.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                SgramError::Config(
                    ErrorInfo::new("unknown-family", format!("unknown N-Gram type '{s}'"))
                        .with_hint("expected one of 1st, 2nd, 3rd, 2d, 3d"),
                )
            })
    }
}
