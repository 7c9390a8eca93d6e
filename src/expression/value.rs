use std::fmt;

/// Result of evaluating an expression
///
/// Integer arithmetic stays exact until it would overflow; true division and
/// negative exponents produce floats.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[cfg_attr(feature = "visualize", serde(untagged))]
pub enum Value {
    /// Exact integer
    Int(i64),
    /// Floating-point number
    Float(f64),
}

impl Value {
    /// Parse an all-digit operand, falling back to a float if it does not
    /// fit in an `i64`
    pub(crate) fn from_digits(token: &str) -> Option<Value> {
        token
            .parse::<i64>()
            .map(Value::Int)
            .ok()
            .or_else(|| token.parse::<f64>().ok().map(Value::Float))
    }

    /// Numeric value as a float
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(v) => v as f64,
            Value::Float(v) => v,
        }
    }

    /// True for integers and finite floats
    pub fn is_finite(self) -> bool {
        match self {
            Value::Int(_) => true,
            Value::Float(v) => v.is_finite(),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write_float(f, *v),
        }
    }
}

/// Shortest round-trip form with a `.0` on whole numbers. Exponents carry
/// an explicit sign and at least two digits (`1e+20`, `1.5e-05`).
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    // Debug switches to exponent form below 1e-4 and from 1e16 upwards
    let repr = format!("{v:?}");
    let Some((mantissa, exp)) = repr.split_once('e') else {
        return f.write_str(&repr);
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exp),
    };
    write!(f, "{mantissa}e{sign}{digits:0>2}")
}
