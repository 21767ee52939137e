#![deny(missing_docs)]
#![doc = "Cyclic state transformer: successor and predecessor steps, distances \
and lazy traces over labelled N-Gram cycles."]

pub mod state;
pub mod transform;

pub use state::{CycleTransition, StateTransformer};
pub use transform::{
    distance, inform, resolve, trace, trace_path, transition_table, Direction, Trace, Transition,
};
