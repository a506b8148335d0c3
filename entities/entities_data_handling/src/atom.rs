//! Atom Naming Convention Module
//!
//! Hosts that only have one string type cannot tell an atom from a binary by
//! type alone. This module implements the convention used throughout the
//! codec: a textual value whose content starts with [`ATOM_SIGIL`] is an atom,
//! anything else is plain text.
//!
//! The sigil never reaches the wire. The encoder strips it before writing
//! `ATOM_EXT` and the decoder puts it back when reading one.
//!
//! ## Examples
//!
//! ```rust
//! use entities_data_handling::{Term, is_atom, atom_to_binary, binary_to_atom};
//!
//! assert!(is_atom(&Term::from(":foo")));
//! assert!(!is_atom(&Term::from("foo")));
//!
//! let atom = binary_to_atom(&Term::from("foo")).unwrap();
//! assert_eq!(atom, Term::from(":foo"));
//! assert_eq!(atom_to_binary(&atom).unwrap(), Term::from("foo"));
//! ```

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * This file is derived from work copyrighted by Ericsson AB 1996-2025.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use thiserror::Error;

use crate::term::Term;

/// Leading character that marks a textual value as an atom
pub const ATOM_SIGIL: char = ':';

/// Maximum number of bytes in an atom name on the wire
pub const MAX_ATOM_CHARACTERS: usize = 255;

/// Errors raised by the atom conversion helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtomError {
    /// The value does not satisfy the conversion's precondition
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Check whether a value is an atom under the sigil convention.
///
/// Only textual values (`Text` and `Bytes`) can be atoms. Numbers and
/// containers always return false, even if they contain atoms.
pub fn is_atom(term: &Term) -> bool {
    atom_name(term).is_some()
}

/// Return the atom name (sigil removed) if the value is an atom.
pub fn atom_name(term: &Term) -> Option<&[u8]> {
    match term {
        Term::Text(text) => text.strip_prefix(ATOM_SIGIL).map(str::as_bytes),
        Term::Bytes(bytes) => bytes.strip_prefix(&[ATOM_SIGIL as u8]),
        _ => None,
    }
}

/// Turn plain text into the atom form by prefixing the sigil.
///
/// # Errors
/// * `AtomError::InvalidValue` - The value is already an atom or is not textual
pub fn binary_to_atom(term: &Term) -> Result<Term, AtomError> {
    match term {
        Term::Text(text) if !is_atom(term) => Ok(Term::Text(format!("{}{}", ATOM_SIGIL, text))),
        Term::Bytes(bytes) if !is_atom(term) => {
            let mut marked = Vec::with_capacity(bytes.len() + 1);
            marked.push(ATOM_SIGIL as u8);
            marked.extend_from_slice(bytes);
            Ok(Term::Bytes(marked))
        }
        _ => Err(AtomError::InvalidValue(term.to_string())),
    }
}

/// Turn an atom back into plain text by removing the sigil.
///
/// # Errors
/// * `AtomError::InvalidValue` - The value is not an atom
pub fn atom_to_binary(term: &Term) -> Result<Term, AtomError> {
    match term {
        Term::Text(text) => text
            .strip_prefix(ATOM_SIGIL)
            .map(|name| Term::Text(name.to_string()))
            .ok_or_else(|| AtomError::InvalidValue(term.to_string())),
        Term::Bytes(bytes) => bytes
            .strip_prefix(&[ATOM_SIGIL as u8])
            .map(|name| Term::Bytes(name.to_vec()))
            .ok_or_else(|| AtomError::InvalidValue(term.to_string())),
        _ => Err(AtomError::InvalidValue(term.to_string())),
    }
}
