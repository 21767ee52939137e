//! Markdown rendering of catalog entries.

use std::io::{self, Write};

use sgram_core::{join_states, Family, NamedCycle, NGram};

fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn cycle_table<'a>(
    out: &mut dyn Write,
    heading: &str,
    cycles: impl Iterator<Item = &'a NamedCycle>,
) -> io::Result<()> {
    writeln!(out, "### {heading}")?;
    writeln!(out)?;
    writeln!(out, "| Divisor | Sequence |")?;
    writeln!(out, "|---------|----------|")?;
    for cycle in cycles {
        writeln!(
            out,
            "| {} | {} |",
            cycle.label(),
            join_states(cycle.sequence(), ", ")
        )?;
    }
    writeln!(out)
}

/// Heading, property table and cycle tables of one entry.
pub fn entry(out: &mut dyn Write, entry: &NGram) -> io::Result<()> {
    writeln!(out, "## {} (Index {})", entry.symbol(), entry.index())?;
    writeln!(out)?;
    writeln!(out, "### Basic Information")?;
    writeln!(out)?;
    writeln!(out, "| Property | Value |")?;
    writeln!(out, "|----------|-------|")?;
    writeln!(out, "| Value | {} |", entry.value())?;
    writeln!(out, "| Formula | {} |", cell(entry.formula()))?;
    if let Some(oeis) = entry.family().oeis() {
        writeln!(out, "| OEIS | {oeis} |")?;
    }
    if let Some(notation) = entry.notation() {
        writeln!(out, "| Catalan Number | {} |", notation.catalan_number)?;
        writeln!(out, "| Fraction | {} |", notation.fraction())?;
        writeln!(out, "| Symbolic Notation | {} |", cell(&notation.symbolic))?;
        writeln!(out, "| Transformation | {} |", cell(&notation.transformation))?;
    }
    writeln!(out)?;
    let patterns = entry.patterns();
    if patterns.standard_len() > 0 {
        cycle_table(out, "Fraction Patterns", patterns.standard())?;
    }
    if patterns.additional_len() > 0 {
        cycle_table(out, "Additional Factors", patterns.additional())?;
    }
    Ok(())
}

/// Complete document for `entries` of `family`.
pub fn document(out: &mut dyn Write, family: Family, entries: &[NGram]) -> io::Result<()> {
    writeln!(out, "# {} Tables", family.description())?;
    writeln!(out)?;
    match (entries.first(), entries.last()) {
        (Some(first), Some(last)) => writeln!(
            out,
            "Complete reference for {} from index {} to {}.",
            family.description(),
            first.index(),
            last.index()
        )?,
        _ => writeln!(out, "No entries in the selected range.")?,
    }
    writeln!(out)?;
    writeln!(out, "| Index | Symbol | Value | Formula |")?;
    writeln!(out, "|-------|--------|-------|---------|")?;
    for item in entries {
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            item.index(),
            item.symbol(),
            item.value(),
            cell(item.formula())
        )?;
    }
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)?;
    for item in entries {
        entry(out, item)?;
        writeln!(out, "---")?;
        writeln!(out)?;
    }
    Ok(())
}
