use std::error::Error;
use std::io::{self, Write};

use clap::Args;
use sgram_core::PatternGroup;
use sgram_cycle::Direction;
use sgram_tables::create;

use super::Context;
use crate::render;

#[derive(Args, Debug)]
pub struct TraceArgs {
    /// Index of the entry.
    pub index: usize,
    /// Starting state.
    pub state: u64,
    /// Number of steps (defaults to the configured value, 10).
    #[arg(long)]
    pub steps: Option<usize>,
    /// Cycle label to walk, e.g. 1/3; the primary cycle when absent.
    #[arg(long)]
    pub pattern: Option<String>,
    /// Look the pattern up among the additional factors only.
    #[arg(long, requires = "pattern")]
    pub additional: bool,
    /// Walk backwards (inform) instead of forwards (resolve).
    #[arg(long)]
    pub reverse: bool,
}

impl TraceArgs {
    fn group(&self) -> PatternGroup {
        if self.additional {
            PatternGroup::Additional
        } else {
            PatternGroup::Any
        }
    }
}

pub fn run(args: &TraceArgs, ctx: &Context) -> Result<(), Box<dyn Error>> {
    let entry = create(ctx.family, args.index)?;
    let steps = args.steps.unwrap_or(ctx.config.trace.steps);
    let mut out = io::stdout().lock();
    render::trace(
        &mut out,
        &entry,
        args.pattern.as_deref(),
        args.group(),
        args.state,
        steps,
        Direction::from_reverse(args.reverse),
    )?;
    out.flush()?;
    Ok(())
}
