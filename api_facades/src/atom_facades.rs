//! Atom Facades
//!
//! Helpers for the atom sigil convention: `":ok"` is the atom `ok`, `"ok"`
//! is the binary `<<"ok">>`.

use entities_data_handling::{AtomError, Term};

/// True when `term` is text or bytes starting with the atom sigil
pub fn is_atom(term: &Term) -> bool {
    entities_data_handling::is_atom(term)
}

/// Turn plain text into its atom form
///
/// Fails with `AtomError::InvalidValue` when `term` is already an atom or is
/// not text.
pub fn binary_to_atom(term: &Term) -> Result<Term, AtomError> {
    entities_data_handling::binary_to_atom(term)
}

/// Strip the sigil from an atom
///
/// Fails with `AtomError::InvalidValue` when `term` is not an atom.
pub fn atom_to_binary(term: &Term) -> Result<Term, AtomError> {
    entities_data_handling::atom_to_binary(term)
}
