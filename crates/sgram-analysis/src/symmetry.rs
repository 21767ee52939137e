//! Equivalence of cycles under reversal.

use indexmap::IndexMap;
use serde::Serialize;
use sgram_core::NamedCycle;

/// Lexicographically smaller of `sequence` and its reverse.
pub fn flip_canonical(sequence: &[u64]) -> Vec<u64> {
    let reversed: Vec<u64> = sequence.iter().rev().copied().collect();
    if reversed.as_slice() < sequence {
        reversed
    } else {
        sequence.to_vec()
    }
}

/// Cycles sharing one canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlipCluster<'a> {
    /// Shared canonical sequence.
    pub canonical: Vec<u64>,
    /// Members in input order.
    pub members: Vec<&'a NamedCycle>,
}

/// Groups cycles by [`flip_canonical`], clusters ordered by first member.
pub fn cluster_by_flip<'a, I>(cycles: I) -> Vec<FlipCluster<'a>>
where
    I: IntoIterator<Item = &'a NamedCycle>,
{
    let mut clusters: IndexMap<Vec<u64>, Vec<&'a NamedCycle>> = IndexMap::new();
    for cycle in cycles {
        clusters
            .entry(flip_canonical(cycle.sequence()))
            .or_default()
            .push(cycle);
    }
    clusters
        .into_iter()
        .map(|(canonical, members)| FlipCluster { canonical, members })
        .collect()
}

#[cfg(test)]
mod tests {
    use sgram_core::CycleKind;

    use super::*;

    #[test]
    fn canonical_prefers_smaller_orientation() {
        assert_eq!(flip_canonical(&[3, 1, 2]), vec![2, 1, 3]);
        assert_eq!(flip_canonical(&[1, 2, 3]), vec![1, 2, 3]);
        assert!(flip_canonical(&[]).is_empty());
    }

    #[test]
    fn reversed_cycles_share_a_cluster() {
        let forward = NamedCycle::new("1/3", vec![1, 2, 3], CycleKind::Primary).unwrap();
        let backward = NamedCycle::new("2/3", vec![3, 2, 1], CycleKind::Standard).unwrap();
        let other = NamedCycle::new("1/2", vec![1, 3], CycleKind::Standard).unwrap();
        let clusters = cluster_by_flip([&forward, &other, &backward]);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].canonical, vec![1, 2, 3]);
        assert_eq!(clusters[0].members.len(), 2);
        assert_eq!(clusters[1].members[0].label(), "1/2");
    }
}
