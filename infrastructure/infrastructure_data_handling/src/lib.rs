//! Infrastructure Layer: Data Handling
//!
//! Provides the recursive term codec.
//! Based on ei_decode_term.c and ei_x_encode.c
//! Depends on Entities layer.
//!
//! `encode_term` writes a term body without the version magic byte and
//! `decode_term` reads one back, returning the unconsumed tail. The magic
//! byte and the compression envelope belong to `infrastructure_external_format`.

pub mod encode_atom;
pub mod decode_atom;
pub mod encode_binary;
pub mod decode_binary;
pub mod encode_term;
pub mod decode_term;

pub use encode_atom::encode_atom;
pub use decode_atom::decode_atom;
pub use encode_binary::encode_binary;
pub use decode_binary::{decode_binary, decode_string};
pub use encode_term::encode_term;
pub use decode_term::decode_term;
