use sgram_core::{Family, FormulaParts, PatternSet, SequenceFamily, SgramError};

use crate::sequential;

/// Number of unlabeled trees with `n` nodes, <https://oeis.org/A000055>.
///
/// Index 0 counts the empty tree as 1.
pub const A000055: [u64; 21] = [
    1, 1, 1, 1, 2, 3, 6, 11, 23, 47, 106, 235, 551, 1301, 3159, 7741, 19320, 48629, 123867, 317955,
    823065,
];

/// 3D Catalan N-Grams backed by the unlabeled tree counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnlabeledTrees;

impl SequenceFamily for UnlabeledTrees {
    fn family(&self) -> Family {
        Family::UnlabeledTrees
    }

    fn symbol(&self, index: usize) -> String {
        format!("ut{index}")
    }

    fn compute_value(&self, index: usize) -> Result<u64, SgramError> {
        A000055.get(index).copied().ok_or_else(|| {
            SgramError::index_out_of_range(Family::UnlabeledTrees.key(), index, A000055.len() - 1)
        })
    }

    fn formula(&self, index: usize, value: u64) -> String {
        format!("A000055({index}) = {value} unlabeled trees")
    }

    fn formula_parts(&self, index: usize, value: u64) -> FormulaParts {
        [
            ("unlabeled_trees".to_string(), value),
            ("index".to_string(), index as u64),
        ]
        .into_iter()
        .collect()
    }

    /// Every tree, plus the odd positions standing for flip-symmetric pairs.
    fn patterns(&self, _index: usize, trees: u64) -> Result<PatternSet, SgramError> {
        if trees == 0 {
            return Ok(PatternSet::builder().pattern("1/1", vec![0])?.build());
        }
        let mut builder = PatternSet::builder().pattern(&format!("1/{trees}"), sequential(trees))?;
        let half = trees.div_ceil(2);
        if trees > 1 && half > 1 {
            let pairs = (1..=trees).step_by(2).collect();
            builder = builder.pattern(&format!("1/{half}"), pairs)?;
        }
        Ok(builder.factor("1/1", vec![trees])?.build())
    }
}
