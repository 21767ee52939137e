use std::error::Error;
use std::io::{self, Write};

use clap::Args;
use sgram_tables::create_range;

use super::Context;
use crate::render;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// First index listed (defaults to the configured range).
    #[arg(long)]
    pub start: Option<usize>,
    /// One past the last index listed.
    #[arg(long)]
    pub end: Option<usize>,
}

pub fn run(args: &SummaryArgs, ctx: &Context) -> Result<(), Box<dyn Error>> {
    let range = ctx.range();
    let start = args.start.unwrap_or(range.start);
    let end = args.end.unwrap_or(range.end);
    let entries = create_range(ctx.family, start..end)?;
    let mut out = io::stdout().lock();
    render::summary(&mut out, ctx.family, &entries)?;
    out.flush()?;
    Ok(())
}
