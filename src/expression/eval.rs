use tracing::debug;

use super::{Operator, Value};
use crate::util::join_spaced;

/// Outcome of a postfix evaluation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Evaluation {
    /// Top of the stack at the end, `None` if the expression is unevaluable
    pub value: Option<Value>,
    /// One entry per token processed, including the one that failed
    pub steps: Vec<String>,
}

impl Evaluation {
    fn failed(steps: Vec<String>) -> Self {
        Self { value: None, steps }
    }
}

/// Operand stack slot as shown in step strings
struct Slot(Option<Value>);

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("undefined"),
        }
    }
}

/// Evaluate a whitespace-separated postfix expression
///
/// Each step shows the token and the operand stack before it is applied.
/// Evaluation stops with no value at the first symbolic operand, unknown
/// operator or operator lacking two operands. Division by zero leaves an
/// undefined slot on the stack; any operation involving it stays undefined.
///
/// An unknown symbol such as `%` fails the whole evaluation, so `"1 2 3 %"`
/// yields `None` instead of silently discarding the two operands it would
/// have consumed and leaving `1` on top.
pub fn eval_postfix(expr: &str) -> Evaluation {
    let mut stack: Vec<Option<Value>> = Vec::new();
    let mut steps = Vec::new();

    for token in expr.split_whitespace() {
        steps.push(format!(
            "Token: {token}\nStack: {}",
            join_spaced(stack.iter().copied().map(Slot))
        ));

        if token.bytes().all(|b| b.is_ascii_digit()) {
            stack.push(Value::from_digits(token));
            continue;
        }
        if token.chars().all(char::is_alphanumeric) {
            debug!(token, "symbolic operand, expression cannot be evaluated");
            return Evaluation::failed(steps);
        }
        let Some(op) = Operator::from_token(token) else {
            debug!(token, "unknown operator");
            return Evaluation::failed(steps);
        };
        let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
            debug!(token, "operator is missing an operand");
            return Evaluation::failed(steps);
        };
        stack.push(lhs.zip(rhs).and_then(|(lhs, rhs)| op.apply(lhs, rhs)));
    }

    Evaluation {
        value: stack.last().copied().flatten(),
        steps,
    }
}
