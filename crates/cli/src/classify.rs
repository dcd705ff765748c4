use anyhow::{Context, Result};
use billiards::api::{CodeSequence, InitialAngles};
use serde::Serialize;

/// One classified code sequence as printed or written by `classify`.
#[derive(Debug, Serialize)]
pub struct ClassifyRow {
    pub input: Vec<i32>,
    pub canonical: Vec<i32>,
    pub length: usize,
    pub sum: i32,
    pub code_type: String,
    pub closed_index: Option<usize>,
    pub angles: String,
    /// Coefficients of `x`, `y`, `eta`.
    pub constraint: [i32; 3],
}

pub fn classify(input: &[i32], angles: InitialAngles) -> Result<ClassifyRow> {
    let seq = CodeSequence::new(input).with_context(|| format!("validating {input:?}"))?;
    let constraint = seq.constraint_for(angles)?;
    Ok(ClassifyRow {
        input: input.to_vec(),
        canonical: seq.as_slice().to_vec(),
        length: seq.len(),
        sum: seq.sum()?,
        code_type: seq.code_type()?.label().to_string(),
        closed_index: seq.closed_index(),
        angles: angles.to_string(),
        constraint: constraint.coeffs(),
    })
}

impl std::fmt::Display for ClassifyRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let canonical: Vec<String> = self.canonical.iter().map(i32::to_string).collect();
        write!(
            f,
            "{:<24} len={:<3} sum={:<5} {:<4} closed={:<4} constraint({})={:?}",
            canonical.join(" "),
            self.length,
            self.sum,
            self.code_type,
            self.closed_index
                .map_or_else(|| "-".to_string(), |i| i.to_string()),
            self.angles,
            self.constraint
        )
    }
}
