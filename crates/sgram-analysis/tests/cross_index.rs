use proptest::prelude::*;
use sgram_analysis::{cluster_by_flip, flip_canonical, CrossIndexAnalyzer};
use sgram_core::Family;
use sgram_tables::{create, create_range, DEFAULT_RANGE};

#[test]
fn common_labels_rank_by_spread() {
    let entries = create_range(Family::Quadratic, DEFAULT_RANGE).unwrap();
    let common = CrossIndexAnalyzer::new(&entries).common_labels();
    assert_eq!(common[0].label, "1/1");
    assert_eq!(common[0].indices, (1..=11).collect::<Vec<_>>());
    assert_eq!(common[1].label, "1/2");
    assert_eq!(common[1].indices, vec![2, 4, 6, 8, 10]);
    assert_eq!(common[2].label, "1/3");
    let ties: Vec<_> = common[3..6].iter().map(|c| c.label.as_str()).collect();
    assert_eq!(ties, vec!["1/7", "1/4", "1/5"]);
    assert!(common.iter().all(|c| c.indices.len() > 1));
}

#[test]
fn entries_are_reordered_by_index() {
    let mut entries = create_range(Family::Quadratic, 2..6).unwrap();
    entries.reverse();
    let analyzer = CrossIndexAnalyzer::new(&entries);
    let order: Vec<_> = analyzer.entries().iter().map(|e| e.index()).collect();
    assert_eq!(order, vec![2, 3, 4, 5]);
}

#[test]
fn primary_comparison_skips_entries_without_cycles() {
    let entries = create_range(Family::Cubic, 0..3).unwrap();
    let comparison = CrossIndexAnalyzer::new(&entries).primary_comparison();
    assert_eq!(comparison.len(), 2);
    assert_eq!(comparison[0].index, 1);
    assert_eq!(comparison[0].label, "1/8");
    assert_eq!(comparison[1].cycle_length, 27);

    let quadratic = create_range(Family::Quadratic, DEFAULT_RANGE).unwrap();
    let comparison = CrossIndexAnalyzer::new(&quadratic).primary_comparison();
    assert_eq!(comparison[3].label, "1/7");
    assert_eq!(comparison[3].symbol, "s4");
    assert_eq!(comparison[3].sequence, vec![1, 4, 2, 8, 5, 7]);
}

#[test]
fn growth_tracks_values_and_patterns() {
    let entries = create_range(Family::Quadratic, DEFAULT_RANGE).unwrap();
    let growth = CrossIndexAnalyzer::new(&entries).growth();
    assert_eq!(growth.values[..4], [2, 5, 10, 17]);
    assert_eq!(growth.deltas[..4], [0, 3, 5, 7]);
    assert_eq!(
        growth.pattern_counts,
        vec![1, 1, 2, 2, 3, 5, 6, 8, 11, 13, 16, 20]
    );
    assert_eq!(growth.total_states[11], 121);
}

#[test]
fn growth_reports_sgram_notation_series() {
    let entries = create_range(Family::Quadratic, 0..4).unwrap();
    let growth = CrossIndexAnalyzer::new(&entries).growth();
    assert_eq!(growth.catalan_numbers, vec![Some(1), Some(2), Some(5), Some(14)]);
    assert_eq!(growth.denominators, vec![Some(0), Some(1), Some(4), Some(9)]);
    assert_eq!(growth.expansions, vec![Some(0), Some(1), Some(3), Some(7)]);

    let cubes = create_range(Family::Cubic, 0..3).unwrap();
    let growth = CrossIndexAnalyzer::new(&cubes).growth();
    assert_eq!(growth.catalan_numbers, vec![None; 3]);
    assert_eq!(growth.expansions, vec![Some(1), Some(8), Some(27)]);

    let lines = create_range(Family::Linear, 0..2).unwrap();
    assert_eq!(CrossIndexAnalyzer::new(&lines).growth().expansions, vec![None, None]);
}

#[test]
fn growth_deltas_reset_after_zero() {
    let entries = create_range(Family::RootedTrees, 0..5).unwrap();
    let growth = CrossIndexAnalyzer::new(&entries).growth();
    assert_eq!(growth.values, vec![0, 1, 1, 2, 4]);
    assert_eq!(growth.deltas, vec![0, 0, 0, 1, 2]);
}

#[test]
fn unlabeled_tree_cycles_cluster_apart() {
    let entry = create(Family::UnlabeledTrees, 6).unwrap();
    let clusters = cluster_by_flip(entry.patterns().cycles());
    assert_eq!(clusters.len(), 3);
    assert_eq!(clusters[1].canonical, vec![1, 3, 5]);
}

proptest! {
    #[test]
    fn canonical_form_ignores_orientation(sequence in prop::collection::vec(any::<u64>(), 0..32)) {
        let reversed: Vec<u64> = sequence.iter().rev().copied().collect();
        prop_assert_eq!(flip_canonical(&sequence), flip_canonical(&reversed));
        let canonical = flip_canonical(&sequence);
        prop_assert!(canonical <= sequence);
    }
}
