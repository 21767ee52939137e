use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;
use sgram_core::{gcd, CycleKind, NGram, NamedCycle, SgramError};

/// Which cycles enter the length statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CycleScope {
    /// Fraction patterns only.
    Standard,
    /// Fraction patterns and additional factors.
    #[default]
    All,
}

/// Length of one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleLength {
    /// Cycle label.
    pub label: String,
    /// Role of the cycle.
    pub kind: CycleKind,
    /// Number of states.
    pub length: usize,
}

/// Aggregate over the cycle lengths of one index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleStatistics {
    /// Per-cycle lengths in pattern order.
    pub lengths: Vec<CycleLength>,
    /// Greatest common divisor of the lengths, 1 when there are none.
    pub gcd: u64,
    /// Longest cycle, 0 when there are none.
    pub max: usize,
    /// Shortest cycle, 0 when there are none.
    pub min: usize,
    /// Number of cycles considered.
    pub count: usize,
}

/// A state lying on two or more cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedState {
    /// The state.
    pub state: u64,
    /// Labels of the cycles containing it, in pattern order.
    pub labels: Vec<String>,
}

/// Full analysis of one index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    /// Symbol of the analysed entry.
    pub symbol: String,
    /// Number of cycles.
    pub pattern_count: usize,
    /// Size of the union of all cycle states.
    pub unique_state_count: usize,
    /// Primary cycle rendered as `label | states`.
    pub primary: Option<String>,
    /// Every cycle rendered the same way.
    pub patterns: Vec<String>,
    /// Length statistics over all cycles.
    pub statistics: CycleStatistics,
    /// States on more than one cycle.
    pub shared_states: Vec<SharedState>,
}

impl fmt::Display for AnalysisSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Fraction Pattern Analysis", self.symbol)?;
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "Total Patterns: {}", self.pattern_count)?;
        writeln!(f, "Total Unique States: {}", self.unique_state_count)?;
        if let Some(primary) = &self.primary {
            writeln!(f)?;
            writeln!(f, "Primary Pattern: {primary}")?;
        }
        writeln!(f)?;
        writeln!(f, "All Patterns:")?;
        for pattern in &self.patterns {
            writeln!(f, "  {pattern}")?;
        }
        writeln!(f)?;
        writeln!(f, "Cycle Analysis:")?;
        writeln!(f, "  Common Divisor: {}", self.statistics.gcd)?;
        writeln!(f, "  Max Cycle Length: {}", self.statistics.max)?;
        write!(f, "  Min Cycle Length: {}", self.statistics.min)?;
        if !self.shared_states.is_empty() {
            write!(f, "\n\nStates appearing in multiple patterns:")?;
            for shared in &self.shared_states {
                write!(
                    f,
                    "\n  State {}: {} patterns ({})",
                    shared.state,
                    shared.labels.len(),
                    shared.labels.join(", ")
                )?;
            }
        }
        Ok(())
    }
}

/// Read-only queries over the cycles of one entry.
///
/// The flat cycle list (fraction patterns, then additional factors) is
/// extracted once at construction; every query is a pure function of it.
#[derive(Debug, Clone)]
pub struct PatternAnalyzer<'a> {
    entry: &'a NGram,
    cycles: Vec<&'a NamedCycle>,
}

impl<'a> PatternAnalyzer<'a> {
    /// Extracts the cycles of `entry`.
    pub fn new(entry: &'a NGram) -> Self {
        let cycles: Vec<_> = entry.patterns().cycles().collect();
        tracing::debug!(symbol = entry.symbol(), cycles = cycles.len(), "analyzer built");
        Self { entry, cycles }
    }

    /// Analysed entry.
    pub fn entry(&self) -> &'a NGram {
        self.entry
    }

    /// Every cycle in pattern order.
    pub fn cycles(&self) -> &[&'a NamedCycle] {
        &self.cycles
    }

    /// The primary cycle, if any.
    pub fn primary(&self) -> Option<&'a NamedCycle> {
        self.entry.patterns().primary()
    }

    /// Cycle named `label`, fraction patterns first.
    pub fn pattern(&self, label: &str) -> Result<&'a NamedCycle, SgramError> {
        self.entry
            .patterns()
            .get(label)
            .ok_or_else(|| SgramError::unknown_label(label))
    }

    /// Cycles whose states include `state`, in pattern order.
    pub fn patterns_containing(&self, state: u64) -> Vec<&'a NamedCycle> {
        self.cycles
            .iter()
            .copied()
            .filter(|cycle| cycle.contains(state))
            .collect()
    }

    /// Union of every cycle's states.
    pub fn all_states(&self) -> BTreeSet<u64> {
        self.entry.patterns().all_states()
    }

    /// Sorted intersection of two cycles' states.
    pub fn overlap(&self, first: &str, second: &str) -> Result<Vec<u64>, SgramError> {
        let first = self.pattern(first)?.state_set();
        let second = self.pattern(second)?.state_set();
        Ok(first.intersection(&second).copied().collect())
    }

    /// Number of cycles containing each state.
    pub fn state_distribution(&self) -> BTreeMap<u64, usize> {
        let mut distribution = BTreeMap::new();
        for cycle in &self.cycles {
            for &state in cycle.sequence() {
                *distribution.entry(state).or_insert(0) += 1;
            }
        }
        distribution
    }

    /// States found on at least two cycles, ascending.
    pub fn shared_states(&self) -> Vec<SharedState> {
        self.state_distribution()
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(state, _)| SharedState {
                state,
                labels: self
                    .patterns_containing(state)
                    .into_iter()
                    .map(|cycle| cycle.label().to_string())
                    .collect(),
            })
            .collect()
    }

    /// Length statistics over the cycles selected by `scope`.
    pub fn cycle_length_statistics(&self, scope: CycleScope) -> CycleStatistics {
        let lengths: Vec<CycleLength> = self
            .cycles
            .iter()
            .filter(|cycle| scope == CycleScope::All || !cycle.is_additional_factor())
            .map(|cycle| CycleLength {
                label: cycle.label().to_string(),
                kind: cycle.kind(),
                length: cycle.len(),
            })
            .collect();
        let divisor = lengths
            .iter()
            .fold(0, |acc, entry| gcd(acc, entry.length as u64));
        CycleStatistics {
            gcd: if lengths.is_empty() { 1 } else { divisor },
            max: lengths.iter().map(|entry| entry.length).max().unwrap_or(0),
            min: lengths.iter().map(|entry| entry.length).min().unwrap_or(0),
            count: lengths.len(),
            lengths,
        }
    }

    /// States of `label` absent from every other cycle of the entry.
    pub fn unique_states(&self, label: &str) -> Result<Vec<u64>, SgramError> {
        let target = self.pattern(label)?;
        Ok(self.unique_to(target))
    }

    /// Unique states of every cycle, in pattern order.
    pub fn unique_states_by_pattern(&self) -> Vec<(&'a NamedCycle, Vec<u64>)> {
        self.cycles
            .iter()
            .map(|&cycle| (cycle, self.unique_to(cycle)))
            .collect()
    }

    /// Everything above, gathered for display.
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            symbol: self.entry.symbol().to_string(),
            pattern_count: self.cycles.len(),
            unique_state_count: self.all_states().len(),
            primary: self.primary().map(ToString::to_string),
            patterns: self.cycles.iter().map(ToString::to_string).collect(),
            statistics: self.cycle_length_statistics(CycleScope::All),
            shared_states: self.shared_states(),
        }
    }

    // Cycles are compared by identity since labels may repeat across groups.
    fn unique_to(&self, target: &NamedCycle) -> Vec<u64> {
        let others: BTreeSet<u64> = self
            .cycles
            .iter()
            .filter(|cycle| !std::ptr::eq(**cycle, target))
            .flat_map(|cycle| cycle.sequence().iter().copied())
            .collect();
        target
            .state_set()
            .into_iter()
            .filter(|state| !others.contains(state))
            .collect()
    }
}
