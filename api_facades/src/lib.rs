//! API Facades Layer
//!
//! The public surface of the workspace: encode a host `Term` into external
//! term format bytes and decode such bytes back.
//!
//! ```rust
//! use api_facades::{decode, encode, Term};
//!
//! let term = Term::Tuple(vec![Term::atom("ok"), Term::from(42)]);
//! let bytes = encode(&term).unwrap();
//! assert_eq!(bytes, vec![131, 104, 2, 100, 0, 2, b'o', b'k', 97, 42]);
//! assert_eq!(decode(&bytes).unwrap(), term);
//! ```
//!
//! All facades call underlying Rust modules from inner layers.

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

pub mod codec_facades;
pub mod atom_facades;

pub use codec_facades::{decode, decode_partial, encode, encode_compressed, encode_with, encoded_size};
pub use atom_facades::{atom_to_binary, binary_to_atom, is_atom};

pub use adapters_json::{encode_json, term_from_json, term_to_json};
pub use entities_data_handling::{AtomError, Term};
pub use entities_utilities::BigNumber;
pub use infrastructure_ei_primitives::{DecodeError, EncodeError, FloatFormat};
pub use infrastructure_external_format::EncodeOptions;
pub use infrastructure_utilities::CompressionLevel;
