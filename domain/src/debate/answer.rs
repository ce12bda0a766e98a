//! Answer extraction
//!
//! Turns the free-text tail of an agent transcript into a comparable value.

use serde::{Deserialize, Serialize};

/// How a final response is reduced to an answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMode {
    /// Rightmost token that parses as a number (arithmetic evaluation)
    Numeric,
    /// The whole trimmed response (open-ended questions)
    #[default]
    Freeform,
}

impl AnswerMode {
    /// Extract an answer from a response, or `None` if nothing usable was found.
    ///
    /// Only numeric mode can come up empty; a blank freeform reply is the
    /// empty answer and still votes. An unparseable response is not an error;
    /// callers drop it before voting.
    pub fn extract(&self, response: &str) -> Option<AnswerValue> {
        match self {
            AnswerMode::Numeric => parse_numeric_answer(response).map(AnswerValue::Number),
            AnswerMode::Freeform => Some(AnswerValue::Text(response.trim().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerMode::Numeric => "numeric",
            AnswerMode::Freeform => "freeform",
        }
    }
}

impl std::fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized answer taken from an agent's final response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl AnswerValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(_) => None,
        }
    }

    /// Exact numeric equality with an integer ground truth
    pub fn equals_integer(&self, expected: i64) -> bool {
        self.as_number().is_some_and(|n| n == expected as f64)
    }
}

impl std::fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            AnswerValue::Number(n) => write!(f, "{}", n),
            AnswerValue::Text(t) => f.write_str(t),
        }
    }
}

/// Scan whitespace-separated tokens from the end and return the first number.
///
/// `inf` counts as a number (it simply never matches a ground truth); `NaN`
/// is skipped because it is not equal to itself and would break voting.
///
/// Commas are read as decimal points, so `"12,5"` is `12.5`.
pub fn parse_numeric_answer(response: &str) -> Option<f64> {
    let normalized = response.replace(',', ".");
    normalized
        .split_whitespace()
        .rev()
        .filter_map(|token| token.parse::<f64>().ok())
        .find(|n| !n.is_nan())
}
