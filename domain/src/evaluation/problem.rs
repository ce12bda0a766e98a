//! Randomized arithmetic problems

use crate::core::question::Question;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Operands are drawn uniformly from `0..OPERAND_UPPER_BOUND`
pub const OPERAND_UPPER_BOUND: i64 = 30;

/// One `a + b*c + d - e*f` instance (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArithmeticProblem {
    operands: [i64; 6],
}

impl ArithmeticProblem {
    pub fn new(operands: [i64; 6]) -> Self {
        Self { operands }
    }

    /// Draw six independent operands
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut operands = [0i64; 6];
        for operand in operands.iter_mut() {
            *operand = rng.gen_range(0..OPERAND_UPPER_BOUND);
        }
        Self { operands }
    }

    pub fn operands(&self) -> [i64; 6] {
        self.operands
    }

    /// `a + b*c + d - e*f` with the usual precedence
    pub fn ground_truth(&self) -> i64 {
        let [a, b, c, d, e, f] = self.operands;
        a + b * c + d - e * f
    }

    /// The expression as shown to the model, e.g. `3+4*5+6-7*8`
    pub fn expression(&self) -> String {
        let [a, b, c, d, e, f] = self.operands;
        format!("{}+{}*{}+{}-{}*{}", a, b, c, d, e, f)
    }

    /// First user message of every agent
    pub fn question(&self) -> Question {
        Question::from_template(format!(
            "What is the result of {}? Make sure to state your answer at the end of the response.",
            self.expression()
        ))
    }

    /// Question passed along when building round messages
    pub fn round_question(&self) -> String {
        format!("We seek to find the result of {}?", self.expression())
    }
}

impl std::fmt::Display for ArithmeticProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.expression())
    }
}
