//! Infix expression conversion and postfix evaluation
//!
//! Conversions run the operator-precedence stack algorithm over the tokens
//! of an infix expression. Every entry point returns its result together
//! with one human-readable step string per processed token, showing how the
//! output and operator stack evolve.

mod convert;
mod eval;
mod value;

pub use convert::{infix_to_postfix, infix_to_prefix, Conversion};
pub use eval::{eval_postfix, Evaluation};
pub use value::Value;

use std::fmt;
use std::str::FromStr;

use crate::util::ParseNameError;

/// Characters that form a token on their own
const SYMBOLS: &str = "+-*/^()";

/// Split an infix expression into operands, operators and parentheses
///
/// Operands are maximal alphanumeric runs; every character of `+-*/^()` is
/// its own token. Anything else, whitespace included, is skipped.
pub fn tokenize(expr: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_alphanumeric() {
            let mut end = start + c.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if !next.is_alphanumeric() {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }
            tokens.push(expr[start..end].to_string());
        } else if SYMBOLS.contains(c) {
            tokens.push(c.to_string());
        }
    }

    tokens
}

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, always true division
    Div,
    /// `^`, exponentiation
    Pow,
}

impl Operator {
    /// Every operator
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    /// The operator's symbol
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    /// Recognise a single-symbol token
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let symbol = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Operator::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Binding strength; higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow => 3,
        }
    }

    /// `^` groups right to left, everything else left to right
    pub fn is_right_associative(self) -> bool {
        self == Operator::Pow
    }

    /// Apply to two operands
    ///
    /// Integer operands stay integers unless the result overflows, in which
    /// case the float result is used. Division always yields a float.
    /// Division by zero and non-finite results give `None`.
    pub fn apply(self, lhs: Value, rhs: Value) -> Option<Value> {
        let result = match (self, lhs, rhs) {
            (Operator::Div, _, _) => {
                let divisor = rhs.as_f64();
                if divisor == 0.0 {
                    return None;
                }
                Value::Float(lhs.as_f64() / divisor)
            }
            (op, Value::Int(a), Value::Int(b)) => match op.apply_int(a, b) {
                Some(v) => Value::Int(v),
                None => Value::Float(op.apply_float(a as f64, b as f64)),
            },
            (op, a, b) => Value::Float(op.apply_float(a.as_f64(), b.as_f64())),
        };
        result.is_finite().then_some(result)
    }

    fn apply_int(self, a: i64, b: i64) -> Option<i64> {
        match self {
            Operator::Add => a.checked_add(b),
            Operator::Sub => a.checked_sub(b),
            Operator::Mul => a.checked_mul(b),
            Operator::Pow => u32::try_from(b).ok().and_then(|exp| a.checked_pow(exp)),
            Operator::Div => None,
        }
    }

    fn apply_float(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div => a / b,
            Operator::Pow => a.powf(b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Target notation of an infix conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Operators after their operands
    Postfix,
    /// Operators before their operands
    Prefix,
}

impl Notation {
    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Notation::Postfix => "postfix",
            Notation::Prefix => "prefix",
        }
    }

    /// Convert an infix expression into this notation
    pub fn convert(self, expr: &str) -> Conversion {
        match self {
            Notation::Postfix => infix_to_postfix(expr),
            Notation::Prefix => infix_to_prefix(expr),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Notation {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postfix" | "rpn" => Ok(Notation::Postfix),
            "prefix" | "polish" => Ok(Notation::Prefix),
            _ => Err(ParseNameError::new("notation", s, "postfix, prefix")),
        }
    }
}
