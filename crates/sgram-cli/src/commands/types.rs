use std::error::Error;
use std::io::{self, Write};

use crate::render;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut out = io::stdout().lock();
    render::types(&mut out)?;
    out.flush()?;
    Ok(())
}
