use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of supported arithmetic operations.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Match an operation name against the closed vocabulary.
    ///
    /// Matching is case-insensitive. Surrounding whitespace is NOT trimmed,
    /// so `" add"` does not resolve.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "add" => Some(Operation::Add),
            "subtract" => Some(Operation::Subtract),
            "multiply" => Some(Operation::Multiply),
            "divide" => Some(Operation::Divide),
            _ => None,
        }
    }

    /// Canonical lowercase name, as echoed in success responses.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("division by zero")]
    DivisionByZero,
}

/// Apply `op` to the two operands.
///
/// Pure and deterministic: the same inputs always produce the same output.
/// Division rejects `b == 0.0` by strict equality before dividing; near-zero
/// divisors are allowed.
pub fn evaluate(op: Operation, a: f64, b: f64) -> Result<f64, EvalError> {
    match op {
        Operation::Add => Ok(a + b),
        Operation::Subtract => Ok(a - b),
        Operation::Multiply => Ok(a * b),
        Operation::Divide => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(a / b)
        }
    }
}
