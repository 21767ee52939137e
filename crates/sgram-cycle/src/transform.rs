//! Stateless operations on a single [`NamedCycle`].
//!
//! Every state of a cycle has exactly one successor and one predecessor in the
//! fixed circular order; `resolve` and `inform` are mutual inverses.

use std::fmt;
use std::iter::FusedIterator;

use sgram_core::{NamedCycle, SgramError};

/// Walking direction along a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Successor steps (`resolve`).
    #[default]
    Forward,
    /// Predecessor steps (`inform`).
    Backward,
}

impl Direction {
    /// `Backward` when `reverse` is set.
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// Applies one step in this direction.
    pub fn step(self, cycle: &NamedCycle, value: u64) -> Result<u64, SgramError> {
        match self {
            Direction::Forward => resolve(cycle, value),
            Direction::Backward => inform(cycle, value),
        }
    }

    fn advance(self, position: usize, len: usize) -> usize {
        match self {
            Direction::Forward => (position + 1) % len,
            Direction::Backward => (position + len - 1) % len,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Backward => f.write_str("backward"),
        }
    }
}

/// Next state after `value`, wrapping at the end of the cycle.
pub fn resolve(cycle: &NamedCycle, value: u64) -> Result<u64, SgramError> {
    let position = cycle.require_position(value)?;
    Ok(cycle.at(position + 1))
}

/// Previous state before `value`, wrapping at the start of the cycle.
pub fn inform(cycle: &NamedCycle, value: u64) -> Result<u64, SgramError> {
    let position = cycle.require_position(value)?;
    Ok(cycle.at(position + cycle.len() - 1))
}

/// Forward circular distance from `from` to `to`, in `0..len`.
pub fn distance(cycle: &NamedCycle, from: u64, to: u64) -> Result<usize, SgramError> {
    let from = cycle.require_position(from)?;
    let to = cycle.require_position(to)?;
    Ok((to + cycle.len() - from) % cycle.len())
}

/// Lazy walk of `steps` moves from `start`, yielding `steps + 1` states.
///
/// The returned iterator borrows the cycle and can be cloned to restart.
pub fn trace(
    cycle: &NamedCycle,
    start: u64,
    steps: usize,
    direction: Direction,
) -> Result<Trace<'_>, SgramError> {
    let position = cycle.require_position(start)?;
    tracing::trace!(label = cycle.label(), start, steps, %direction, "trace started");
    Ok(Trace {
        cycle,
        position,
        remaining: steps.saturating_add(1),
        direction,
    })
}

/// Eagerly collected [`trace`].
pub fn trace_path(
    cycle: &NamedCycle,
    start: u64,
    steps: usize,
    direction: Direction,
) -> Result<Vec<u64>, SgramError> {
    Ok(trace(cycle, start, steps, direction)?.collect())
}

/// Iterator returned by [`trace`].
#[derive(Debug, Clone)]
pub struct Trace<'a> {
    cycle: &'a NamedCycle,
    position: usize,
    remaining: usize,
    direction: Direction,
}

impl Trace<'_> {
    /// Direction the trace walks in.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Iterator for Trace<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let state = self.cycle.at(self.position);
        self.position = self.direction.advance(self.position, self.cycle.len());
        Some(state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Trace<'_> {}

impl FusedIterator for Trace<'_> {}

/// Neighbours of one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The state itself.
    pub state: u64,
    /// Predecessor (`inform`).
    pub previous: u64,
    /// Successor (`resolve`).
    pub next: u64,
}

/// `(previous, next)` for every state, in cycle order.
pub fn transition_table(cycle: &NamedCycle) -> Vec<Transition> {
    let len = cycle.len();
    (0..len)
        .map(|position| Transition {
            state: cycle.at(position),
            previous: cycle.at(position + len - 1),
            next: cycle.at(position + 1),
        })
        .collect()
}
