use sgram_core::{Family, FormulaParts, PatternSet, SequenceFamily, SgramError};

use crate::{overflow, sequential};

/// 1st power N-Grams: `N₁(n) = 1 + (1 + n)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl SequenceFamily for Linear {
    fn family(&self) -> Family {
        Family::Linear
    }

    fn symbol(&self, index: usize) -> String {
        format!("n1_{index}")
    }

    fn compute_value(&self, index: usize) -> Result<u64, SgramError> {
        u64::try_from(index)
            .ok()
            .and_then(|index| index.checked_add(2))
            .ok_or_else(|| overflow(Family::Linear, index))
    }

    fn formula(&self, index: usize, value: u64) -> String {
        format!("N₁({index}) = 1 + (1 + {index}) = {value}")
    }

    fn formula_parts(&self, _index: usize, value: u64) -> FormulaParts {
        [("base".to_string(), 1), ("increment".to_string(), value.saturating_sub(1))]
            .into_iter()
            .collect()
    }

    // A single trivial cycle over every state.
    fn patterns(&self, _index: usize, value: u64) -> Result<PatternSet, SgramError> {
        Ok(PatternSet::builder()
            .pattern(&format!("1/{value}"), sequential(value))?
            .build())
    }
}
