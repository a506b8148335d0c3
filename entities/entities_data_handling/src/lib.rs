//! Entities Layer: Data Handling
//!
//! This crate provides the host-side representation of Erlang terms that the
//! external term format codec reads and writes.
//!
//! ## Overview
//!
//! The `entities_data_handling` crate is part of the entities layer in the CLEAN architecture
//! layout of this workspace. It has no knowledge of the wire format; it only defines the
//! values that the encoder accepts and the decoder produces.
//!
//! ## Modules
//!
//! - **[`term`](term/index.html)**: The `Term` enum: integers of any size, floats, text,
//!   raw bytes, tuples, sets and proper lists. Also renders terms in Erlang syntax.
//!
//! - **[`atom`](atom/index.html)**: The sigil convention used to tell atoms apart from
//!   plain text (`":ok"` is the atom `ok`, `"ok"` is the binary `<<"ok">>`), together with
//!   `is_atom`, `binary_to_atom` and `atom_to_binary`.
//!
//! ## Usage
//!
//! ```rust
//! use entities_data_handling::{Term, is_atom, binary_to_atom};
//!
//! let reply = Term::Tuple(vec![Term::atom("ok"), Term::from(42)]);
//! assert_eq!(reply.to_string(), "{ok,42}");
//!
//! let name = binary_to_atom(&Term::from("error")).unwrap();
//! assert!(is_atom(&name));
//! ```
//!
//! ## See Also
//!
//! - [`entities_utilities`](../entities_utilities/index.html): Arbitrary precision integers

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

pub mod term;
pub mod atom;

// Re-export main types for convenience
pub use term::Term;
pub use atom::{
    atom_name, atom_to_binary, binary_to_atom, is_atom, AtomError, ATOM_SIGIL,
    MAX_ATOM_CHARACTERS,
};
pub use entities_utilities::BigNumber;
