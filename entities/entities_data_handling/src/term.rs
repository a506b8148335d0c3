//! Term Module
//!
//! Defines the `Term` enum, the host value accepted by the encoder and
//! produced by the decoder.
//!
//! Text and raw bytes double as atoms through the sigil convention described
//! in [`atom`](super::atom). Everything else maps one-to-one onto a wire kind:
//!
//! | Variant | Wire kind |
//! |---|---|
//! | `Integer` | small integer, integer, small/large big |
//! | `Float` | new float (or old float when requested) |
//! | `Text` / `Bytes` | binary, or atom when sigil-marked |
//! | `Tuple` / `Set` | small/large tuple |
//! | `List` | list, or nil when empty |
//!
//! Based on ei_printterm.c for the `Display` rendering.

use std::fmt;

use entities_utilities::BigNumber;

use crate::atom::{atom_name, ATOM_SIGIL};

/// Host representation of an Erlang term
#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    /// Integer of any magnitude
    Integer(BigNumber),
    /// IEEE-754 double
    Float(f64),
    /// Text; a leading `:` makes it an atom
    Text(String),
    /// Raw binary data; a leading `b':'` makes it an atom
    Bytes(Vec<u8>),
    /// Ordered tuple
    Tuple(Vec<Term>),
    /// Members of an unordered collection, written as a tuple in iteration order
    Set(Vec<Term>),
    /// Proper list; the empty list is nil
    List(Vec<Term>),
}

impl Term {
    /// Build an atom term from its bare name
    pub fn atom(name: &str) -> Self {
        Term::Text(format!("{}{}", ATOM_SIGIL, name))
    }

    /// The empty list
    pub fn nil() -> Self {
        Term::List(Vec::new())
    }

    /// Short name of the variant, recorded as a field on tracing events
    pub fn kind(&self) -> &'static str {
        match self {
            Term::Integer(_) => "integer",
            Term::Float(_) => "float",
            Term::Text(_) => "text",
            Term::Bytes(_) => "bytes",
            Term::Tuple(_) => "tuple",
            Term::Set(_) => "set",
            Term::List(_) => "list",
        }
    }
}

macro_rules! term_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Term {
                fn from(value: $t) -> Self {
                    Term::Integer(BigNumber::from(value))
                }
            }
        )*
    };
}

term_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl From<BigNumber> for Term {
    fn from(value: BigNumber) -> Self {
        Term::Integer(value)
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::Float(value)
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::Text(value.to_string())
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Term::Text(value)
    }
}

impl From<Vec<u8>> for Term {
    fn from(value: Vec<u8>) -> Self {
        Term::Bytes(value)
    }
}

impl From<&[u8]> for Term {
    fn from(value: &[u8]) -> Self {
        Term::Bytes(value.to_vec())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = atom_name(self) {
            return write_atom(f, name);
        }
        match self {
            Term::Integer(n) => write!(f, "{}", n),
            Term::Float(x) => write!(f, "{:?}", x),
            Term::Text(text) => write_binary(f, text.as_bytes()),
            Term::Bytes(bytes) => write_binary(f, bytes),
            Term::Tuple(elements) | Term::Set(elements) => {
                write_sequence(f, '{', elements, '}')
            }
            Term::List(elements) => write_sequence(f, '[', elements, ']'),
        }
    }
}

fn write_sequence(f: &mut fmt::Formatter<'_>, open: char, elements: &[Term], close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", element)?;
    }
    write!(f, "{}", close)
}

// Unquoted atoms start with a lowercase letter and continue with
// alphanumerics, `_` or `@`.
fn write_atom(f: &mut fmt::Formatter<'_>, name: &[u8]) -> fmt::Result {
    let text = String::from_utf8_lossy(name);
    let bare = text.chars().next().is_some_and(|c| c.is_ascii_lowercase())
        && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '@');
    if bare {
        return write!(f, "{}", text);
    }
    write!(f, "'")?;
    for c in text.chars() {
        match c {
            '\'' => write!(f, "\\'")?,
            '\\' => write!(f, "\\\\")?,
            _ => write!(f, "{}", c)?,
        }
    }
    write!(f, "'")
}

fn write_binary(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    match std::str::from_utf8(bytes) {
        Ok(text) => {
            write!(f, "<<\"")?;
            for c in text.chars() {
                match c {
                    '"' => write!(f, "\\\"")?,
                    '\\' => write!(f, "\\\\")?,
                    _ => write!(f, "{}", c)?,
                }
            }
            write!(f, "\">>")
        }
        Err(_) => {
            write!(f, "<<")?;
            for (i, byte) in bytes.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", byte)?;
            }
            write!(f, ">>")
        }
    }
}
