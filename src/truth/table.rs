use crate::error::Result;
use crate::expr::parse;

/// Complete enumeration of a boolean function of N variables: 2^N labeled
/// rows, regenerated fresh for every request.
#[derive(Debug, Clone, PartialEq)]
pub struct TruthTable {
    /// One bit-vector per row, binary-counting order, values 0.0/1.0.
    pub inputs: Vec<Vec<f64>>,
    /// One {0.0, 1.0} label per row.
    pub outputs: Vec<f64>,
}

impl TruthTable {
    /// Evaluates `expression` over every combination of `num_variables`
    /// input bits.
    ///
    /// Row `i` holds the N-bit binary representation of `i`, most
    /// significant bit first, so `X1` is the slowest-changing column. Any
    /// failure (bad syntax, a variable outside `X1..XN`) aborts the whole
    /// table; a partial table is never returned.
    pub fn generate(num_variables: usize, expression: &str) -> Result<TruthTable> {
        let expr = parse(expression)?;

        let row_count = 1usize << num_variables;
        let mut inputs = Vec::with_capacity(row_count);
        let mut outputs = Vec::with_capacity(row_count);

        for i in 0..row_count {
            let bits: Vec<bool> = (0..num_variables)
                .map(|k| (i >> (num_variables - 1 - k)) & 1 == 1)
                .collect();

            let label = expr.eval(&bits)?;

            inputs.push(bits.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect());
            outputs.push(if label { 1.0 } else { 0.0 });
        }

        Ok(TruthTable { inputs, outputs })
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}
