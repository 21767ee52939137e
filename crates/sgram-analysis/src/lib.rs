#![deny(missing_docs)]
#![doc = "Pure aggregation over N-Gram pattern sets: per-index statistics, \
cross-index comparison and flip-symmetry clustering."]

mod analyzer;
mod cross;
mod symmetry;

pub use analyzer::{
    AnalysisSummary, CycleLength, CycleScope, CycleStatistics, PatternAnalyzer, SharedState,
};
pub use cross::{CommonLabel, CrossIndexAnalyzer, GrowthCurves, PrimaryPattern};
pub use symmetry::{cluster_by_flip, flip_canonical, FlipCluster};
