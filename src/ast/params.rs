//! Parameter handling for parameters mode
//!
//! In parameters mode every literal becomes a positional placeholder and its
//! value is collected here, in encounter order. Values stay decoupled from
//! any database driver; [`ParamValue::to_json`] is the interchange form.

use super::expr::{Literal, Number};

/// A bound parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// SQL NULL
    Null,
    /// Boolean value
    Bool(bool),
    /// String value
    String(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Exact numeric text, kept as supplied
    Numeric(String),
}

impl ParamValue {
    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Convert to a JSON value for handing to a driver
    ///
    /// Exact numerics become JSON numbers when they parse as one and strings
    /// otherwise. Non-finite floats have no JSON form and become null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Integer(n) => serde_json::Value::from(*n),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::Numeric(text) => serde_json::from_str::<serde_json::Number>(text)
                .map(serde_json::Value::Number)
                .unwrap_or_else(|_| serde_json::Value::String(text.clone())),
        }
    }
}

impl From<&Literal> for ParamValue {
    fn from(lit: &Literal) -> Self {
        match lit {
            Literal::Null => Self::Null,
            Literal::Bool(b) => Self::Bool(*b),
            Literal::String(s) => Self::String(s.clone()),
            Literal::Number(Number::Integer(n)) => Self::Integer(*n),
            Literal::Number(Number::Float(f)) => Self::Float(*f),
            Literal::Number(Number::Text(t)) => Self::Numeric(t.clone()),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        Self::Integer(n as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

/// Collects parameters during a single render
///
/// Each call to `add()` returns the 1-based index of the new placeholder.
#[derive(Debug, Default)]
pub struct ParamCollector {
    params: Vec<ParamValue>,
}

impl ParamCollector {
    /// Create a new empty parameter collector
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Add a parameter and return its placeholder index
    ///
    /// Parameters are 1-indexed in SQL ($1, $2, etc.)
    pub fn add(&mut self, value: ParamValue) -> usize {
        self.params.push(value);
        self.params.len()
    }

    /// Get all collected parameters
    pub fn into_params(self) -> Vec<ParamValue> {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_collector() {
        let mut collector = ParamCollector::new();

        let first = collector.add(ParamValue::String("hello".into()));
        let second = collector.add(ParamValue::Integer(42));

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        let params = collector.into_params();
        assert_eq!(params.len(), 2);
        assert!(matches!(params[0], ParamValue::String(_)));
        assert!(matches!(params[1], ParamValue::Integer(42)));
    }

    #[test]
    fn test_from_literal() {
        assert_eq!(ParamValue::from(&Literal::Null), ParamValue::Null);
        assert_eq!(
            ParamValue::from(&Literal::numeric_text("1.50")),
            ParamValue::Numeric("1.50".into())
        );
        assert_eq!(ParamValue::from(&Literal::number(50)), ParamValue::Integer(50));
    }

    #[test]
    fn test_to_json() {
        assert_eq!(ParamValue::Null.to_json(), serde_json::Value::Null);
        assert_eq!(ParamValue::Integer(50).to_json(), serde_json::json!(50));
        assert_eq!(ParamValue::Bool(true).to_json(), serde_json::json!(true));
        assert_eq!(ParamValue::from("x").to_json(), serde_json::json!("x"));
        assert_eq!(ParamValue::Float(f64::NAN).to_json(), serde_json::Value::Null);
        assert_eq!(
            ParamValue::Numeric("not a number".into()).to_json(),
            serde_json::json!("not a number")
        );
        assert!(ParamValue::Numeric("12.5".into()).to_json().is_number());
    }
}
