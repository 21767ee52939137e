use std::error::Error;
use std::io::{self, Write};

use clap::Args;
use sgram_tables::create;

use super::Context;
use crate::render;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Index of the entry.
    pub index: usize,
    /// Number of fraction patterns to print transition tables for.
    #[arg(long, default_value_t = 3)]
    pub transitions: usize,
    /// Append the fraction pattern analysis (shared and unique states).
    #[arg(long)]
    pub analysis: bool,
}

pub fn run(args: &ShowArgs, ctx: &Context) -> Result<(), Box<dyn Error>> {
    let entry = create(ctx.family, args.index)?;
    let mut out = io::stdout().lock();
    render::details(&mut out, &entry, args.transitions)?;
    if args.analysis {
        render::analysis(&mut out, &entry)?;
    }
    out.flush()?;
    Ok(())
}
