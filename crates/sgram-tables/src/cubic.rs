use sgram_core::{Family, FormulaParts, PatternSet, SequenceFamily, SgramError};

use crate::{overflow, sequential};

/// 3rd power N-Grams: `N₃(n) = 1 + (1 + n)³`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cubic;

fn cube_base(index: usize) -> Option<u64> {
    u64::try_from(index).ok()?.checked_add(1)
}

impl SequenceFamily for Cubic {
    fn family(&self) -> Family {
        Family::Cubic
    }

    fn symbol(&self, index: usize) -> String {
        format!("n3_{index}")
    }

    fn compute_value(&self, index: usize) -> Result<u64, SgramError> {
        cube_base(index)
            .and_then(|base| base.checked_pow(3))
            .and_then(|cube| cube.checked_add(1))
            .ok_or_else(|| overflow(Family::Cubic, index))
    }

    fn formula(&self, index: usize, value: u64) -> String {
        let cube = value.saturating_sub(1);
        format!("N₃({index}) = 1 + (1+{index})³ = 1 + {cube} = {value}")
    }

    fn formula_parts(&self, index: usize, value: u64) -> FormulaParts {
        let mut parts = FormulaParts::new();
        parts.insert("base".to_string(), 1);
        if let Some(base) = cube_base(index) {
            parts.insert("cube_base".to_string(), base);
        }
        parts.insert("expansion".to_string(), value.saturating_sub(1));
        parts
    }

    /// The full cube, the base, and a stride-`base` walk below `base²`.
    ///
    /// Index 0 (`base == 1`) has no cycle at all.
    fn patterns(&self, index: usize, value: u64) -> Result<PatternSet, SgramError> {
        let expansion = value.saturating_sub(1);
        let base = cube_base(index).ok_or_else(|| overflow(Family::Cubic, index))?;
        let mut builder = PatternSet::builder();
        if expansion > 1 {
            builder = builder.pattern(&format!("1/{expansion}"), sequential(expansion))?;
        }
        if base > 1 {
            builder = builder.pattern(&format!("1/{base}"), sequential(base))?;
            let base_sq = base
                .checked_mul(base)
                .ok_or_else(|| overflow(Family::Cubic, index))?;
            if base_sq != expansion {
                let stride = (1..=base_sq).step_by(base as usize).collect();
                builder = builder.pattern(&format!("1/{base_sq}"), stride)?;
            }
            builder = builder.factor("1/1", vec![expansion])?;
        }
        Ok(builder.build())
    }
}
