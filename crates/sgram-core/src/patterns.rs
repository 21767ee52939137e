use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::cycle::{CycleKind, NamedCycle};
use crate::errors::SgramError;

/// Group a label lookup searches.
///
/// Labels can repeat across groups (quadratic index 4 lists `1/4` in both),
/// so the additional factors are only reachable by naming their group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternGroup {
    /// Fraction patterns first, then additional factors.
    #[default]
    Any,
    /// Fraction patterns only.
    Standard,
    /// Additional factors only.
    Additional,
}

/// Cycles owned by one index, split into fraction patterns and additional factors.
///
/// The primary cycle is recorded explicitly when the first fraction pattern is
/// added; iteration order of both groups is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PatternSet {
    standard: IndexMap<String, NamedCycle>,
    additional: IndexMap<String, NamedCycle>,
    primary: Option<String>,
}

impl PatternGroup {
    /// Name used in error coordinates.
    pub fn as_str(self) -> &'static str {
        match self {
            PatternGroup::Any => "any",
            PatternGroup::Standard => "standard",
            PatternGroup::Additional => "additional",
        }
    }
}

impl PatternSet {
    /// Starts an empty builder.
    pub fn builder() -> PatternSetBuilder {
        PatternSetBuilder::default()
    }

    /// The designated default cycle, if any fraction pattern exists.
    pub fn primary(&self) -> Option<&NamedCycle> {
        self.primary
            .as_deref()
            .and_then(|label| self.standard.get(label))
    }

    /// Label of the primary cycle.
    pub fn primary_label(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    /// Looks a label up, preferring fraction patterns over additional factors.
    pub fn get(&self, label: &str) -> Option<&NamedCycle> {
        self.standard
            .get(label)
            .or_else(|| self.additional.get(label))
    }

    /// Looks a label up among the fraction patterns only.
    pub fn get_standard(&self, label: &str) -> Option<&NamedCycle> {
        self.standard.get(label)
    }

    /// Looks a label up among the additional factors only.
    pub fn get_additional(&self, label: &str) -> Option<&NamedCycle> {
        self.additional.get(label)
    }

    /// Picks the cycle named by `label`, or the primary cycle when `None`.
    pub fn select(&self, label: Option<&str>) -> Result<&NamedCycle, SgramError> {
        self.select_in(label, PatternGroup::Any)
    }

    /// Like [`select`](Self::select) with the label lookup limited to `group`.
    ///
    /// `None` still selects the primary cycle, whatever the group.
    pub fn select_in(
        &self,
        label: Option<&str>,
        group: PatternGroup,
    ) -> Result<&NamedCycle, SgramError> {
        let Some(label) = label else {
            return self.primary().ok_or_else(SgramError::no_patterns);
        };
        let found = match group {
            PatternGroup::Any => self.get(label),
            PatternGroup::Standard => self.get_standard(label),
            PatternGroup::Additional => self.get_additional(label),
        };
        found.ok_or_else(|| SgramError::unknown_label(label).with_context("group", group.as_str()))
    }

    /// Fraction patterns in insertion order (primary first).
    pub fn standard(&self) -> impl ExactSizeIterator<Item = &NamedCycle> + '_ {
        self.standard.values()
    }

    /// Additional factors in insertion order.
    pub fn additional(&self) -> impl ExactSizeIterator<Item = &NamedCycle> + '_ {
        self.additional.values()
    }

    /// Every cycle: fraction patterns first, then additional factors.
    pub fn cycles(&self) -> impl Iterator<Item = &NamedCycle> + '_ {
        self.standard.values().chain(self.additional.values())
    }

    /// Number of fraction patterns.
    pub fn standard_len(&self) -> usize {
        self.standard.len()
    }

    /// Number of additional factors.
    pub fn additional_len(&self) -> usize {
        self.additional.len()
    }

    /// Total number of cycles across both groups.
    pub fn len(&self) -> usize {
        self.standard.len() + self.additional.len()
    }

    /// Whether the set holds no cycle at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Union of the states of every cycle.
    pub fn all_states(&self) -> BTreeSet<u64> {
        self.cycles()
            .flat_map(|cycle| cycle.sequence().iter().copied())
            .collect()
    }
}

/// Incremental constructor for [`PatternSet`].
#[derive(Debug, Default)]
pub struct PatternSetBuilder {
    set: PatternSet,
}

impl PatternSetBuilder {
    /// Adds a fraction pattern; the first one becomes the primary cycle.
    pub fn pattern(mut self, label: &str, sequence: Vec<u64>) -> Result<Self, SgramError> {
        if self.set.standard.contains_key(label) {
            return Err(SgramError::invalid_cycle(label, "duplicate fraction pattern label"));
        }
        let kind = if self.set.primary.is_none() {
            CycleKind::Primary
        } else {
            CycleKind::Standard
        };
        let cycle = NamedCycle::new(label, sequence, kind)?;
        if kind == CycleKind::Primary {
            self.set.primary = Some(label.to_string());
        }
        self.set.standard.insert(label.to_string(), cycle);
        Ok(self)
    }

    /// Adds an additional factor cycle.
    pub fn factor(mut self, label: &str, sequence: Vec<u64>) -> Result<Self, SgramError> {
        if self.set.additional.contains_key(label) {
            return Err(SgramError::invalid_cycle(label, "duplicate additional factor label"));
        }
        let cycle = NamedCycle::new(label, sequence, CycleKind::AdditionalFactor)?;
        self.set.additional.insert(label.to_string(), cycle);
        Ok(self)
    }

    /// Adds every `(label, sequence)` pair as a fraction pattern.
    pub fn patterns<'a, I>(self, entries: I) -> Result<Self, SgramError>
    where
        I: IntoIterator<Item = (&'a str, &'a [u64])>,
    {
        entries
            .into_iter()
            .try_fold(self, |builder, (label, sequence)| {
                builder.pattern(label, sequence.to_vec())
            })
    }

    /// Adds every `(label, sequence)` pair as an additional factor.
    pub fn factors<'a, I>(self, entries: I) -> Result<Self, SgramError>
    where
        I: IntoIterator<Item = (&'a str, &'a [u64])>,
    {
        entries
            .into_iter()
            .try_fold(self, |builder, (label, sequence)| {
                builder.factor(label, sequence.to_vec())
            })
    }

    /// Finishes construction.
    pub fn build(self) -> PatternSet {
        tracing::trace!(
            standard = self.set.standard.len(),
            additional = self.set.additional.len(),
            primary = ?self.set.primary,
            "pattern set built"
        );
        self.set
    }
}
