//! JSON Terms Module
//!
//! | JSON | Term |
//! |---|---|
//! | integer number | `Integer` |
//! | other number | `Float` |
//! | string | `Text` (an atom when it starts with `:`) |
//! | array | `List` |
//! | `null`, boolean, object | unsupported |
//!
//! Going back, tuples and sets also become arrays, and integers outside the
//! 64-bit range become decimal strings since JSON numbers cannot hold them.

use entities_data_handling::Term;
use infrastructure_ei_primitives::EncodeError;
use infrastructure_external_format::{erts_encode_ext, EncodeOptions};
use serde_json::{Number, Value};

/// Convert a JSON value to a term
///
/// # Errors
/// `EncodeError::UnsupportedType` naming the first JSON kind with no term
/// counterpart.
pub fn term_from_json(value: &Value) -> Result<Term, EncodeError> {
    match value {
        Value::String(s) => Ok(Term::Text(s.clone())),
        Value::Number(n) => number_to_term(n),
        Value::Array(items) => items
            .iter()
            .map(term_from_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Term::List),
        Value::Null => Err(EncodeError::UnsupportedType("null".to_string())),
        Value::Bool(_) => Err(EncodeError::UnsupportedType("bool".to_string())),
        Value::Object(_) => Err(EncodeError::UnsupportedType("object".to_string())),
    }
}

fn number_to_term(n: &Number) -> Result<Term, EncodeError> {
    if let Some(i) = n.as_i64() {
        return Ok(Term::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Term::from(u));
    }
    n.as_f64()
        .map(Term::Float)
        .ok_or_else(|| EncodeError::InvalidValue(format!("unrepresentable number {}", n)))
}

/// Convert a term to a JSON value
pub fn term_to_json(term: &Term) -> Value {
    match term {
        Term::Integer(n) => {
            if let Some(i) = n.to_i64() {
                Value::from(i)
            } else if let Some(u) = n.to_u64() {
                Value::from(u)
            } else {
                Value::String(n.to_string())
            }
        }
        Term::Float(x) => Number::from_f64(*x).map(Value::Number).unwrap_or(Value::Null),
        Term::Text(s) => Value::String(s.clone()),
        Term::Bytes(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        Term::Tuple(elements) | Term::Set(elements) | Term::List(elements) => {
            Value::Array(elements.iter().map(term_to_json).collect())
        }
    }
}

/// Encode a JSON value as a magic-prefixed external term
///
/// # Arguments
/// * `value` - JSON value to encode
/// * `compression` - Optional zlib level, 0 through 9
pub fn encode_json(value: &Value, compression: Option<u32>) -> Result<Vec<u8>, EncodeError> {
    let term = term_from_json(value)?;
    let options = match compression {
        Some(level) => EncodeOptions::new().with_compression_level(level)?,
        None => EncodeOptions::new(),
    };
    erts_encode_ext(&term, &options)
}
