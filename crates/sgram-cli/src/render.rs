//! Plain text reports printed by the subcommands.

use std::error::Error;
use std::io::Write;

use sgram_analysis::{cluster_by_flip, CrossIndexAnalyzer, CycleScope, PatternAnalyzer};
use sgram_core::{join_states, ErrorInfo, Family, NGram, PatternGroup, SgramError};
use sgram_cycle::{Direction, StateTransformer};

/// Number of common labels listed by `compare`.
pub const TOP_COMMON_LABELS: usize = 10;

type RenderResult = Result<(), Box<dyn Error>>;

fn rule(width: usize) -> String {
    "=".repeat(width)
}

fn dashes(width: usize) -> String {
    "-".repeat(width)
}

/// Lists the five families.
pub fn types(out: &mut dyn Write) -> RenderResult {
    writeln!(out, "Available N-Gram Types:")?;
    writeln!(out, "{}", rule(70))?;
    for family in Family::ALL {
        writeln!(out, "  {:5} : {}", family.key(), family.description())?;
    }
    writeln!(out)?;
    writeln!(out, "Use --type <TYPE> to specify which N-Gram type to use")?;
    writeln!(out, "Default is '{}' (S-Grams)", Family::default().key())?;
    Ok(())
}

/// One line per entry; quadratic entries also show their notation.
pub fn summary(out: &mut dyn Write, family: Family, entries: &[NGram]) -> RenderResult {
    writeln!(out, "{} Summary", family.description())?;
    writeln!(out, "{}", rule(90))?;
    if family == Family::Quadratic {
        writeln!(
            out,
            "{:>5} | {:>6} | {:>8} | {:>10} | {:>14} | {:>8}",
            "Index", "Symbol", "Catalan", "Fraction", "Formula Result", "Patterns"
        )?;
        writeln!(out, "{}", dashes(90))?;
        for entry in entries {
            let (catalan, fraction) = entry
                .notation()
                .map(|notation| (notation.catalan_number, notation.fraction()))
                .unwrap_or_default();
            writeln!(
                out,
                "{:>5} | {:>6} | {:>8} | {:>10} | {:>14} | {:>8}",
                entry.index(),
                entry.symbol(),
                catalan,
                fraction,
                entry.value(),
                entry.patterns().len()
            )?;
        }
    } else {
        writeln!(
            out,
            "{:<8} {:<12} {:<10} {:<10} Formula",
            "Index", "Symbol", "Value", "Patterns"
        )?;
        writeln!(out, "{}", dashes(90))?;
        for entry in entries {
            writeln!(
                out,
                "{:<8} {:<12} {:<10} {:<10} {}",
                entry.index(),
                entry.symbol(),
                entry.value(),
                entry.patterns().len(),
                entry.formula()
            )?;
        }
    }
    writeln!(out, "{}", rule(90))?;
    Ok(())
}

/// Entry details, cycle statistics and up to `transition_tables` transition tables.
pub fn details(out: &mut dyn Write, entry: &NGram, transition_tables: usize) -> RenderResult {
    writeln!(out, "{entry}")?;

    let analyzer = PatternAnalyzer::new(entry);
    writeln!(out)?;
    writeln!(out, "CYCLE INFORMATION")?;
    writeln!(out, "{}", dashes(70))?;
    writeln!(out, "{:>10} | {:>12} | {:>20}", "Pattern", "Cycle Length", "Type")?;
    writeln!(out, "{}", dashes(70))?;
    for cycle in analyzer.cycles() {
        writeln!(
            out,
            "{:>10} | {:>12} | {:>20}",
            cycle.label(),
            cycle.len(),
            cycle.kind().as_str()
        )?;
    }
    writeln!(out, "{}", dashes(70))?;
    let stats = analyzer.cycle_length_statistics(CycleScope::All);
    writeln!(out, "Common Divisor: {}", stats.gcd)?;
    writeln!(out, "Max Cycle: {}, Min Cycle: {}", stats.max, stats.min)?;

    let transformer = StateTransformer::new(entry);
    for cycle in entry.patterns().standard().take(transition_tables) {
        writeln!(out)?;
        writeln!(out, "STATE TRANSITION TABLE (Pattern: {})", cycle.label())?;
        writeln!(out, "{}", dashes(70))?;
        writeln!(
            out,
            "{:>8} | {:>8} | {:>8} | {:>15} | {:>15}",
            "State", "Previous", "Next", "Resolving →", "← Informing"
        )?;
        writeln!(out, "{}", dashes(70))?;
        for row in transformer.transition_table(Some(cycle.label()))? {
            writeln!(
                out,
                "{:>8} | {:>8} | {:>8} | {:>5} → {:>5} | {:>5} ← {:>5}",
                row.state, row.previous, row.next, row.state, row.next, row.previous, row.state
            )?;
        }
        writeln!(out, "{}", dashes(70))?;
    }

    if entry.family() == Family::UnlabeledTrees {
        writeln!(out)?;
        writeln!(out, "FLIP SYMMETRY CLUSTERS")?;
        writeln!(out, "{}", dashes(70))?;
        for cluster in cluster_by_flip(entry.patterns().cycles()) {
            let members: Vec<&str> = cluster.members.iter().map(|cycle| cycle.label()).collect();
            writeln!(
                out,
                "  [{}] <- {}",
                join_states(&cluster.canonical, " "),
                members.join(", ")
            )?;
        }
    }
    Ok(())
}

/// Analysis summary followed by the states unique to each cycle.
pub fn analysis(out: &mut dyn Write, entry: &NGram) -> RenderResult {
    let analyzer = PatternAnalyzer::new(entry);
    writeln!(out)?;
    writeln!(out, "{}", analyzer.summary())?;
    writeln!(out)?;
    writeln!(out, "Unique States:")?;
    for (cycle, states) in analyzer.unique_states_by_pattern() {
        writeln!(out, "  {:>8} | {}", cycle.label(), join_states(&states, " "))?;
    }
    Ok(())
}

/// Neighbours of `state` on every cycle of `entry` containing it.
pub fn transitions(out: &mut dyn Write, entry: &NGram, state: u64) -> RenderResult {
    let transitions = StateTransformer::new(entry).transitions_for(state);
    if transitions.is_empty() {
        return Err(SgramError::ValueNotInCycle(
            ErrorInfo::new(
                "value-not-in-cycle",
                format!("state {state} not found in any pattern of {}", entry.symbol()),
            )
            .with_context("symbol", entry.symbol())
            .with_context("state", state),
        )
        .into());
    }
    writeln!(out, "State Transitions for {}, State {state}", entry.symbol())?;
    writeln!(out, "{}", rule(70))?;
    let labels: Vec<&str> = transitions
        .iter()
        .map(|transition| transition.cycle.label())
        .collect();
    writeln!(out, "State {state} appears in patterns: {}", labels.join(", "))?;
    for transition in &transitions {
        writeln!(out)?;
        let role = if transition.cycle.is_additional_factor() {
            " (additional)"
        } else {
            ""
        };
        writeln!(out, "Pattern {}{role}:", transition.cycle.label())?;
        writeln!(out, "  Inform (←):  {} ← {state}", transition.previous)?;
        writeln!(out, "  Current:     {state}")?;
        writeln!(out, "  Resolve (→): {state} → {}", transition.next)?;
    }
    Ok(())
}

/// Walk of `steps` moves from `start` on the selected cycle.
pub fn trace(
    out: &mut dyn Write,
    entry: &NGram,
    label: Option<&str>,
    group: PatternGroup,
    start: u64,
    steps: usize,
    direction: Direction,
) -> RenderResult {
    let cycle = StateTransformer::new(entry).in_group(group).cycle(label)?;
    let walk = sgram_cycle::trace(cycle, start, steps, direction)?;
    let heading = match direction {
        Direction::Forward => "Resolving (→)",
        Direction::Backward => "Informing (←)",
    };
    writeln!(out, "Path Trace for {}", entry.symbol())?;
    writeln!(
        out,
        "Pattern: {}{}, Starting State: {start}, Direction: {heading}",
        cycle.label(),
        if cycle.is_additional_factor() { " (additional)" } else { "" }
    )?;
    writeln!(out, "{}", rule(70))?;
    for (step, state) in walk.enumerate() {
        let prefix = if step == 0 {
            "Start: ".to_string()
        } else {
            format!("Step {step}: ")
        };
        writeln!(out, "{prefix:>10}{state}")?;
    }
    Ok(())
}

fn optional(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |value| value.to_string())
}

/// Primary cycles, unique states, growth and common labels across `entries`.
pub fn comparison(out: &mut dyn Write, family: Family, entries: &[NGram]) -> RenderResult {
    let analyzer = CrossIndexAnalyzer::new(entries);
    writeln!(out, "{} Comparison", family.description())?;
    writeln!(out, "{}", rule(90))?;

    writeln!(out)?;
    writeln!(out, "Primary Pattern Cycle Lengths:")?;
    writeln!(out, "{}", dashes(90))?;
    for primary in analyzer.primary_comparison() {
        writeln!(
            out,
            "  {}: {} -> Cycle Length = {}",
            primary.symbol, primary.label, primary.cycle_length
        )?;
    }

    let growth = analyzer.growth();
    writeln!(out)?;
    writeln!(
        out,
        "{:<8} {:<12} {:<15} {:<10} Unique States",
        "Index", "Value", "Growth Rate", "Patterns"
    )?;
    writeln!(out, "{}", dashes(90))?;
    for position in 0..growth.indices.len() {
        writeln!(
            out,
            "{:<8} {:<12} {:<15} {:<10} {}",
            growth.indices[position],
            growth.values[position],
            growth.deltas[position],
            growth.pattern_counts[position],
            growth.total_states[position]
        )?;
    }
    if growth.catalan_numbers.iter().any(Option::is_some) {
        writeln!(out)?;
        writeln!(out, "{:<8} {:<12} {:<12} Expansion", "Index", "Catalan", "Denominator")?;
        writeln!(out, "{}", dashes(90))?;
        for position in 0..growth.indices.len() {
            writeln!(
                out,
                "{:<8} {:<12} {:<12} {}",
                growth.indices[position],
                optional(growth.catalan_numbers[position]),
                optional(growth.denominators[position]),
                optional(growth.expansions[position])
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Common Patterns Across Indices:")?;
    writeln!(out, "{}", dashes(90))?;
    let common = analyzer.common_labels();
    if common.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for label in common.iter().take(TOP_COMMON_LABELS) {
        writeln!(out, "  {}: appears in indices {:?}", label.label, label.indices)?;
    }
    writeln!(out, "{}", rule(90))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use sgram_tables::{create, create_range, DEFAULT_RANGE};

    use super::*;

    fn capture(render: impl FnOnce(&mut dyn Write) -> RenderResult) -> String {
        let mut buffer = Vec::new();
        render(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn types_lists_every_family() {
        let text = capture(|out| types(out));
        for family in Family::ALL {
            assert!(text.contains(family.description()));
        }
        assert!(text.contains("Default is '2nd'"));
    }

    #[test]
    fn quadratic_summary_shows_fractions() {
        let entries = create_range(Family::Quadratic, DEFAULT_RANGE).unwrap();
        let text = capture(|out| summary(out, Family::Quadratic, &entries));
        assert!(text.contains("Formula Result"));
        assert!(text.contains("    3 |     s4 |       14 |        1/3 |             17 |        3"));
    }

    #[test]
    fn trace_prints_each_step() {
        let entry = create(Family::Quadratic, 3).unwrap();
        let text = capture(|out| trace(out, &entry, None, PatternGroup::Any, 1, 5, Direction::Forward));
        assert!(text.contains("Pattern: 1/7, Starting State: 1, Direction: Resolving (→)"));
        assert!(text.contains("\n   Start: 1\n"));
        assert!(text.contains("\n  Step 5: 7\n"));
    }

    #[test]
    fn trace_reaches_additional_factor_sharing_a_label() {
        let entry = create(Family::Quadratic, 4).unwrap();
        let standard = capture(|out| {
            trace(out, &entry, Some("1/4"), PatternGroup::Any, 4, 3, Direction::Forward)
        });
        assert!(standard.contains("Pattern: 1/4, Starting State: 4"));
        assert!(standard.contains("\n  Step 1: 8\n"));
        let factor = capture(|out| {
            trace(out, &entry, Some("1/4"), PatternGroup::Additional, 4, 3, Direction::Forward)
        });
        assert!(factor.contains("Pattern: 1/4 (additional), Starting State: 4"));
        assert!(factor.contains("\n  Step 1: 12\n"));
        assert!(factor.contains("\n  Step 2: 4\n"));
    }

    #[test]
    fn transitions_list_each_cycle() {
        let entry = create(Family::Quadratic, 4).unwrap();
        let text = capture(|out| transitions(out, &entry, 8));
        assert!(text.contains("State 8 appears in patterns: 1/4, 1/2"));
        assert!(text.contains("Pattern 1/2 (additional):"));
        assert!(text.contains("  Resolve (→): 8 → 12"));
    }

    #[test]
    fn missing_state_is_an_error() {
        let entry = create(Family::Quadratic, 3).unwrap();
        let mut buffer = Vec::new();
        let err = transitions(&mut buffer, &entry, 42).unwrap_err();
        assert!(err.to_string().contains("state 42 not found in any pattern of s4"));
    }

    #[test]
    fn details_include_flip_clusters_for_unlabeled_trees() {
        let entry = create(Family::UnlabeledTrees, 6).unwrap();
        let text = capture(|out| details(out, &entry, 1));
        assert!(text.contains("FLIP SYMMETRY CLUSTERS"));
        assert!(text.contains("  [1 3 5] <- 1/3"));
        assert!(text.contains("STATE TRANSITION TABLE (Pattern: 1/6)"));
        assert!(!text.contains("STATE TRANSITION TABLE (Pattern: 1/3)"));
    }

    #[test]
    fn analysis_lists_shared_and_unique_states() {
        let entry = create(Family::Quadratic, 4).unwrap();
        let text = capture(|out| analysis(out, &entry));
        assert!(text.contains("s5 Fraction Pattern Analysis"));
        assert!(text.contains("  State 12: 2 patterns (1/4, 1/4)"));
        assert!(text.contains("      1/13 | 1 3 5 11 13 15"));
    }

    #[test]
    fn comparison_ranks_common_labels() {
        let entries = create_range(Family::Quadratic, DEFAULT_RANGE).unwrap();
        let text = capture(|out| comparison(out, Family::Quadratic, &entries));
        assert!(text.contains("  s4: 1/7 -> Cycle Length = 6"));
        assert!(text.contains("  1/1: appears in indices [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]"));
        assert!(text.contains("\n3        14           9            7\n"));
    }

    #[test]
    fn comparison_skips_notation_outside_sgrams() {
        let entries = create_range(Family::Cubic, 0..4).unwrap();
        let text = capture(|out| comparison(out, Family::Cubic, &entries));
        assert!(!text.contains("Catalan"));
    }
}
