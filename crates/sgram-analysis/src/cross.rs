use indexmap::IndexMap;
use serde::Serialize;
use sgram_core::NGram;

/// A label occurring at two or more indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonLabel {
    /// The shared label.
    pub label: String,
    /// Indices carrying it, ascending and without repeats.
    pub indices: Vec<usize>,
}

/// Primary cycle of one index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryPattern {
    /// Entry index.
    pub index: usize,
    /// Entry symbol.
    pub symbol: String,
    /// Primary cycle label.
    pub label: String,
    /// Number of states in the primary cycle.
    pub cycle_length: usize,
    /// States in cycle order.
    pub sequence: Vec<u64>,
}

/// Per-index series, aligned on `indices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrowthCurves {
    /// Entry indices, ascending.
    pub indices: Vec<usize>,
    /// Sequence values.
    pub values: Vec<u64>,
    /// First differences; 0 for the first entry and after a zero value.
    pub deltas: Vec<u64>,
    /// Number of fraction patterns.
    pub pattern_counts: Vec<usize>,
    /// Size of the union of all cycle states.
    pub total_states: Vec<usize>,
    /// Catalan number of each S-Gram; `None` outside the quadratic family.
    pub catalan_numbers: Vec<Option<u64>>,
    /// Fraction denominator of each S-Gram; `None` outside the quadratic family.
    pub denominators: Vec<Option<u64>>,
    /// The `expansion` formula part, where the family records one.
    pub expansions: Vec<Option<u64>>,
}

/// Queries spanning several entries of one family.
#[derive(Debug, Clone)]
pub struct CrossIndexAnalyzer<'a> {
    entries: Vec<&'a NGram>,
}

impl<'a> CrossIndexAnalyzer<'a> {
    /// Orders `entries` by index.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a NGram>,
    {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by_key(|entry| entry.index());
        tracing::debug!(entries = entries.len(), "cross-index analyzer built");
        Self { entries }
    }

    /// Entries in index order.
    pub fn entries(&self) -> &[&'a NGram] {
        &self.entries
    }

    /// Labels present at two or more indices, most widespread first.
    ///
    /// Ties keep the order in which labels were first met.
    pub fn common_labels(&self) -> Vec<CommonLabel> {
        let mut seen: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for entry in &self.entries {
            for cycle in entry.patterns().cycles() {
                let indices = seen.entry(cycle.label()).or_default();
                if indices.last() != Some(&entry.index()) {
                    indices.push(entry.index());
                }
            }
        }
        let mut common: Vec<CommonLabel> = seen
            .into_iter()
            .filter(|(_, indices)| indices.len() > 1)
            .map(|(label, indices)| CommonLabel {
                label: label.to_string(),
                indices,
            })
            .collect();
        common.sort_by(|a, b| b.indices.len().cmp(&a.indices.len()));
        common
    }

    /// Primary cycle of every entry that has one.
    pub fn primary_comparison(&self) -> Vec<PrimaryPattern> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let primary = entry.patterns().primary()?;
                Some(PrimaryPattern {
                    index: entry.index(),
                    symbol: entry.symbol().to_string(),
                    label: primary.label().to_string(),
                    cycle_length: primary.len(),
                    sequence: primary.sequence().to_vec(),
                })
            })
            .collect()
    }

    /// Value, delta and pattern growth across the entries.
    pub fn growth(&self) -> GrowthCurves {
        let values: Vec<u64> = self.entries.iter().map(|entry| entry.value()).collect();
        let deltas = values
            .iter()
            .enumerate()
            .map(|(position, &value)| match position.checked_sub(1) {
                Some(previous) if values[previous] > 0 => value.saturating_sub(values[previous]),
                _ => 0,
            })
            .collect();
        GrowthCurves {
            indices: self.entries.iter().map(|entry| entry.index()).collect(),
            deltas,
            pattern_counts: self
                .entries
                .iter()
                .map(|entry| entry.patterns().standard_len())
                .collect(),
            total_states: self
                .entries
                .iter()
                .map(|entry| entry.patterns().all_states().len())
                .collect(),
            catalan_numbers: self
                .entries
                .iter()
                .map(|entry| entry.notation().map(|notation| notation.catalan_number))
                .collect(),
            denominators: self
                .entries
                .iter()
                .map(|entry| entry.notation().map(|notation| notation.denominator))
                .collect(),
            expansions: self
                .entries
                .iter()
                .map(|entry| entry.formula_parts().get("expansion").copied())
                .collect(),
            values,
        }
    }
}
