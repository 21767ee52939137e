use std::error::Error;
use std::io::{self, Write};

use clap::Args;
use sgram_tables::create;

use super::Context;
use crate::render;

#[derive(Args, Debug)]
pub struct TransitionArgs {
    /// Index of the entry.
    pub index: usize,
    /// State to inspect.
    pub state: u64,
}

pub fn run(args: &TransitionArgs, ctx: &Context) -> Result<(), Box<dyn Error>> {
    let entry = create(ctx.family, args.index)?;
    let mut out = io::stdout().lock();
    render::transitions(&mut out, &entry, args.state)?;
    out.flush()?;
    Ok(())
}
