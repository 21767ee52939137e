//! Transformer bound to one catalog entry.

use sgram_core::{NGram, NamedCycle, PatternGroup, SgramError};

use crate::transform::{self, Direction, Trace, Transition};

/// Neighbours of a state within one of the cycles containing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTransition<'a> {
    /// Cycle the neighbours belong to.
    pub cycle: &'a NamedCycle,
    /// Predecessor in that cycle.
    pub previous: u64,
    /// Successor in that cycle.
    pub next: u64,
}

/// Cyclic transformer over the cycles of a single [`NGram`].
///
/// Every operation takes an optional label; `None` selects the entry's
/// primary cycle and fails with `NoPatternsAvailable` when there is none.
/// Labels are looked up in every group unless [`in_group`](Self::in_group)
/// narrows the search.
#[derive(Debug, Clone, Copy)]
pub struct StateTransformer<'a> {
    entry: &'a NGram,
    group: PatternGroup,
}

impl<'a> StateTransformer<'a> {
    /// Binds a transformer to `entry`.
    pub fn new(entry: &'a NGram) -> Self {
        tracing::debug!(
            symbol = entry.symbol(),
            cycles = entry.patterns().len(),
            "transformer bound"
        );
        Self {
            entry,
            group: PatternGroup::Any,
        }
    }

    /// Restricts label lookups to `group`.
    pub fn in_group(self, group: PatternGroup) -> Self {
        Self { group, ..self }
    }

    /// Entry the transformer operates on.
    pub fn entry(&self) -> &'a NGram {
        self.entry
    }

    /// Cycle named by `label`, or the primary cycle.
    pub fn cycle(&self, label: Option<&str>) -> Result<&'a NamedCycle, SgramError> {
        self.entry.cycle_in(label, self.group)
    }

    /// Successor of `value`.
    pub fn resolve(&self, value: u64, label: Option<&str>) -> Result<u64, SgramError> {
        transform::resolve(self.cycle(label)?, value)
    }

    /// Predecessor of `value`.
    pub fn inform(&self, value: u64, label: Option<&str>) -> Result<u64, SgramError> {
        transform::inform(self.cycle(label)?, value)
    }

    /// Forward circular distance between two states.
    pub fn distance(&self, from: u64, to: u64, label: Option<&str>) -> Result<usize, SgramError> {
        transform::distance(self.cycle(label)?, from, to)
    }

    /// Lazy walk of `steps` moves from `start`.
    pub fn trace(
        &self,
        start: u64,
        steps: usize,
        direction: Direction,
        label: Option<&str>,
    ) -> Result<Trace<'a>, SgramError> {
        transform::trace(self.cycle(label)?, start, steps, direction)
    }

    /// Collected walk of `steps` moves from `start`.
    pub fn trace_path(
        &self,
        start: u64,
        steps: usize,
        direction: Direction,
        label: Option<&str>,
    ) -> Result<Vec<u64>, SgramError> {
        Ok(self.trace(start, steps, direction, label)?.collect())
    }

    /// Number of states in the selected cycle.
    pub fn cycle_length(&self, label: Option<&str>) -> Result<usize, SgramError> {
        Ok(self.cycle(label)?.len())
    }

    /// `(previous, next)` for every state of the selected cycle.
    pub fn transition_table(&self, label: Option<&str>) -> Result<Vec<Transition>, SgramError> {
        Ok(transform::transition_table(self.cycle(label)?))
    }

    /// Neighbours of `state` in every cycle containing it, standard cycles first.
    pub fn transitions_for(&self, state: u64) -> Vec<CycleTransition<'a>> {
        self.entry
            .patterns()
            .cycles()
            .filter_map(|cycle| {
                let position = cycle.position(state)?;
                Some(CycleTransition {
                    cycle,
                    previous: cycle.at(position + cycle.len() - 1),
                    next: cycle.at(position + 1),
                })
            })
            .collect()
    }

    /// Switches from cycle `from` to cycle `to` at `state`.
    ///
    /// Returns the state when it lies on both cycles, `None` otherwise.
    pub fn cross_pattern_transition(
        &self,
        state: u64,
        from: &str,
        to: &str,
    ) -> Result<Option<u64>, SgramError> {
        let from = self.cycle(Some(from))?;
        let to = self.cycle(Some(to))?;
        Ok((from.contains(state) && to.contains(state)).then_some(state))
    }
}
