use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SgramError;

/// Role a cycle plays inside its [`PatternSet`](crate::PatternSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CycleKind {
    /// The designated default cycle of the index.
    Primary,
    /// Any other fraction pattern of the index.
    Standard,
    /// A structural factor listed separately from the fraction patterns.
    AdditionalFactor,
}

impl CycleKind {
    /// Label used in tables and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            CycleKind::Primary => "Primary",
            CycleKind::Standard => "Standard",
            CycleKind::AdditionalFactor => "Additional Factor",
        }
    }
}

/// A labelled, ordered, circular sequence of distinct states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedCycle {
    label: String,
    sequence: Vec<u64>,
    kind: CycleKind,
}

impl NamedCycle {
    /// Validates and builds a cycle.
    ///
    /// The label must read `numerator/denominator` and the sequence must be
    /// non-empty with no repeated state, otherwise position lookups would be
    /// ambiguous.
    pub fn new(
        label: impl Into<String>,
        sequence: Vec<u64>,
        kind: CycleKind,
    ) -> Result<Self, SgramError> {
        let label = label.into();
        parse_label(&label)?;
        if sequence.is_empty() {
            return Err(SgramError::invalid_cycle(&label, "cycle sequence is empty"));
        }
        let mut sorted = sequence.clone();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            let state = pair[0];
            return Err(
                SgramError::invalid_cycle(&label, format!("state {state} appears twice"))
                    .with_context("state", state),
            );
        }
        Ok(Self {
            label,
            sequence,
            kind,
        })
    }

    /// Fraction-style label, e.g. `1/7`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// States in cycle order.
    pub fn sequence(&self) -> &[u64] {
        &self.sequence
    }

    /// Role of the cycle inside its pattern set.
    pub fn kind(&self) -> CycleKind {
        self.kind
    }

    /// Whether this is the designated default cycle.
    pub fn is_primary(&self) -> bool {
        self.kind == CycleKind::Primary
    }

    /// Whether this cycle is an additional factor.
    pub fn is_additional_factor(&self) -> bool {
        self.kind == CycleKind::AdditionalFactor
    }

    /// Number of states in the cycle.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always false for a validated cycle.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Numerator of the label.
    pub fn numerator(&self) -> u64 {
        parse_label(&self.label).map(|(n, _)| n).unwrap_or_default()
    }

    /// Denominator of the label.
    pub fn denominator(&self) -> u64 {
        parse_label(&self.label).map(|(_, d)| d).unwrap_or_default()
    }

    /// Whether `state` is part of the cycle.
    pub fn contains(&self, state: u64) -> bool {
        self.sequence.contains(&state)
    }

    /// Position of `state` in the cycle, if present.
    pub fn position(&self, state: u64) -> Option<usize> {
        self.sequence.iter().position(|&value| value == state)
    }

    /// Position of `state`, failing with `ValueNotInCycle` when absent.
    pub fn require_position(&self, state: u64) -> Result<usize, SgramError> {
        self.position(state)
            .ok_or_else(|| SgramError::value_not_in_cycle(&self.label, state))
    }

    /// State at `position` taken modulo the cycle length.
    pub fn at(&self, position: usize) -> u64 {
        self.sequence[position % self.sequence.len()]
    }

    /// Distinct states of the cycle as a sorted set.
    pub fn state_set(&self) -> BTreeSet<u64> {
        self.sequence.iter().copied().collect()
    }
}

impl fmt::Display for NamedCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} |", self.label)?;
        for state in &self.sequence {
            write!(f, " {state}")?;
        }
        match self.kind {
            CycleKind::Primary => write!(f, " (primary)"),
            CycleKind::AdditionalFactor => write!(f, " (additional)"),
            CycleKind::Standard => Ok(()),
        }
    }
}

fn parse_label(label: &str) -> Result<(u64, u64), SgramError> {
    let malformed = || {
        SgramError::invalid_cycle(label, "label must read numerator/denominator")
    };
    let (numerator, denominator) = label.split_once('/').ok_or_else(malformed)?;
    let numerator = numerator.trim().parse().map_err(|_| malformed())?;
    let denominator = denominator.trim().parse().map_err(|_| malformed())?;
    Ok((numerator, denominator))
}
