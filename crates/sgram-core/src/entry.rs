use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::cycle::NamedCycle;
use crate::errors::SgramError;
use crate::family::Family;
use crate::patterns::{PatternGroup, PatternSet};

/// Named integer parts of the formula evaluated for an entry.
pub type FormulaParts = IndexMap<String, u64>;

/// Bracket notation carried by the quadratic family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SGramNotation {
    /// Catalan number associated with the index.
    pub catalan_number: u64,
    /// Numerator of the index fraction.
    pub numerator: u64,
    /// Denominator of the index fraction.
    pub denominator: u64,
    /// Symbolic bracket notation.
    pub symbolic: String,
    /// Visual transformation pattern.
    pub transformation: String,
}

impl SGramNotation {
    /// Fraction in lowest terms; a zero denominator is kept literally.
    pub fn fraction(&self) -> String {
        if self.denominator == 0 {
            return format!("{}/0", self.numerator);
        }
        let divisor = gcd(self.numerator, self.denominator);
        format!(
            "{}/{}",
            self.numerator / divisor,
            self.denominator / divisor
        )
    }
}

/// One immutable (family, index) entry of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NGram {
    pub(crate) family: Family,
    pub(crate) index: usize,
    pub(crate) value: u64,
    pub(crate) symbol: String,
    pub(crate) formula: String,
    pub(crate) formula_parts: FormulaParts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) notation: Option<SGramNotation>,
    pub(crate) patterns: PatternSet,
}

impl NGram {
    /// Family the entry belongs to.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Index within the family.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Sequence value at the index.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Symbolic name (`s4`, `rt5`, `n3_2`, ...).
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Rendered formula string.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Named integer parts of the formula.
    pub fn formula_parts(&self) -> &FormulaParts {
        &self.formula_parts
    }

    /// Bracket notation, present for the quadratic family only.
    pub fn notation(&self) -> Option<&SGramNotation> {
        self.notation.as_ref()
    }

    /// Cycles owned by the entry.
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Selects a cycle by label, or the primary cycle when `label` is `None`.
    pub fn cycle(&self, label: Option<&str>) -> Result<&NamedCycle, SgramError> {
        self.cycle_in(label, PatternGroup::Any)
    }

    /// Like [`cycle`](Self::cycle) with the label lookup limited to `group`.
    pub fn cycle_in(
        &self,
        label: Option<&str>,
        group: PatternGroup,
    ) -> Result<&NamedCycle, SgramError> {
        self.patterns
            .select_in(label, group)
            .map_err(|err| err.with_context("symbol", &self.symbol))
    }
}

impl fmt::Display for NGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(60);
        writeln!(f, "{rule}")?;
        writeln!(f, "{}: {}", self.family.description(), self.symbol)?;
        writeln!(f, "Index: {}", self.index)?;
        writeln!(f, "Value: {}", self.value)?;
        writeln!(f, "Formula: {}", self.formula)?;
        if let Some(oeis) = self.family.oeis() {
            writeln!(f, "OEIS: {oeis}")?;
        }
        if let Some(notation) = &self.notation {
            writeln!(
                f,
                "Catalan: [{}]  Fraction: {} -> {}/{}",
                notation.catalan_number,
                notation.fraction(),
                notation.numerator,
                notation.denominator
            )?;
            writeln!(f, "Symbolic Notation: {}", notation.symbolic)?;
            writeln!(f, "Transformation: {}", notation.transformation)?;
        }
        write!(f, "{rule}")?;
        if self.patterns.standard_len() > 0 {
            write!(f, "\n\nFraction Patterns:")?;
            for cycle in self.patterns.standard() {
                write!(
                    f,
                    "\n  {} | {}",
                    cycle.label(),
                    join_states(cycle.sequence(), " ")
                )?;
            }
        }
        if self.patterns.additional_len() > 0 {
            write!(f, "\n\nAdditional Factors:")?;
            for cycle in self.patterns.additional() {
                write!(
                    f,
                    "\n  {} | {}",
                    cycle.label(),
                    join_states(cycle.sequence(), " ")
                )?;
            }
        }
        Ok(())
    }
}

/// Joins states with `separator`.
pub fn join_states(states: &[u64], separator: &str) -> String {
    states
        .iter()
        .map(|state| state.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Greatest common divisor; `gcd(0, 0) == 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
