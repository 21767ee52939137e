use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use sgram_core::{ErrorInfo, Family, NGram, SgramError};
use sgram_tables::create_range;

use super::Context;
use crate::catalog::CatalogDocument;
use crate::config::ExportFormat;
use crate::markdown;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file (defaults to NGRAMS_<TYPE>_TABLES.<ext>).
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,
}

/// File name used when no output path is configured.
pub fn default_output(family: Family, format: ExportFormat) -> PathBuf {
    PathBuf::from(format!(
        "NGRAMS_{}_TABLES.{}",
        family.key().to_uppercase(),
        format.extension()
    ))
}

fn io_error(path: &Path, err: std::io::Error) -> SgramError {
    SgramError::Io(
        ErrorInfo::new("export-write", err.to_string())
            .with_context("path", path.display()),
    )
}

/// Writes `entries` to `path` in `format`.
pub fn write_catalog(
    path: &Path,
    family: Family,
    entries: &[NGram],
    format: ExportFormat,
) -> Result<(), SgramError> {
    let file = File::create(path).map_err(|err| io_error(path, err))?;
    let mut writer = BufWriter::new(file);
    match format {
        ExportFormat::Markdown => {
            markdown::document(&mut writer, family, entries).map_err(|err| io_error(path, err))?
        }
        ExportFormat::Json => {
            let json = CatalogDocument::new(family, entries)?.to_json_pretty()?;
            writeln!(writer, "{json}").map_err(|err| io_error(path, err))?;
        }
    }
    writer.flush().map_err(|err| io_error(path, err))?;
    tracing::info!(path = %path.display(), entries = entries.len(), "catalog exported");
    Ok(())
}

pub fn run(args: &ExportArgs, ctx: &Context) -> Result<(), Box<dyn Error>> {
    let format = args.format.unwrap_or(ctx.config.export.format);
    let output = args
        .output
        .clone()
        .or_else(|| ctx.config.export.output.clone())
        .unwrap_or_else(|| default_output(ctx.family, format));
    let entries = create_range(ctx.family, ctx.range())?;
    write_catalog(&output, ctx.family, &entries, format)?;
    println!(
        "Exported {} tables to {}",
        ctx.family.description(),
        output.display()
    );
    Ok(())
}
