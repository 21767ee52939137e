use std::error::Error;
use std::io::{self, Write};

use sgram_tables::create_range;

use super::Context;
use crate::render;

pub fn run(ctx: &Context) -> Result<(), Box<dyn Error>> {
    let entries = create_range(ctx.family, ctx.range())?;
    let mut out = io::stdout().lock();
    render::comparison(&mut out, ctx.family, &entries)?;
    out.flush()?;
    Ok(())
}
