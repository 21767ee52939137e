use sgram_core::{Family, FormulaParts, PatternSet, SequenceFamily, SgramError};

use crate::sequential;

/// Number of rooted trees with `n` nodes, <https://oeis.org/A000081>.
///
/// Index 0 is recorded as 0; some sources use 1.
pub const A000081: [u64; 21] = [
    0, 1, 1, 2, 4, 9, 20, 48, 115, 286, 719, 1842, 4766, 12486, 32973, 87811, 235381, 634847,
    1721159, 4688676, 12826228,
];

/// 2D Catalan N-Grams backed by the rooted tree counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootedTrees;

impl SequenceFamily for RootedTrees {
    fn family(&self) -> Family {
        Family::RootedTrees
    }

    fn symbol(&self, index: usize) -> String {
        format!("rt{index}")
    }

    fn compute_value(&self, index: usize) -> Result<u64, SgramError> {
        A000081.get(index).copied().ok_or_else(|| {
            SgramError::index_out_of_range(Family::RootedTrees.key(), index, A000081.len() - 1)
        })
    }

    fn formula(&self, index: usize, value: u64) -> String {
        format!("A000081({index}) = {value} rooted trees")
    }

    fn formula_parts(&self, index: usize, value: u64) -> FormulaParts {
        [
            ("rooted_trees".to_string(), value),
            ("index".to_string(), index as u64),
        ]
        .into_iter()
        .collect()
    }

    /// Every tree, plus sub-hierarchies for the first three divisors in `2..=10`.
    fn patterns(&self, _index: usize, trees: u64) -> Result<PatternSet, SgramError> {
        let mut builder = PatternSet::builder();
        if trees == 0 {
            return Ok(builder.build());
        }
        builder = builder.pattern(&format!("1/{trees}"), sequential(trees))?;
        if trees > 1 {
            let divisors = (2..=trees.min(10)).filter(|d| trees % d == 0).take(3);
            for divisor in divisors {
                let step = (trees / divisor) as usize;
                let walk = (divisor..=trees).step_by(step).collect();
                builder = builder.pattern(&format!("{divisor}/{trees}"), walk)?;
            }
            builder = builder.factor("1/1", vec![trees])?;
        }
        Ok(builder.build())
    }
}
