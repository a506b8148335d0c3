//! Infrastructure Layer: External Term Format
//!
//! Provides external term format (ETF) framing for serialized terms. This
//! crate adds the version magic byte, the optional zlib envelope and exact
//! size calculation on top of the recursive term codec.
//!
//! ## Overview
//!
//! The `infrastructure_external_format` crate is part of the infrastructure layer in the
//! CLEAN architecture layout. The buffers it produces and accepts are the ones used for:
//! - `erlang:term_to_binary/1,2` and `erlang:binary_to_term/1`
//! - Port and RPC payloads exchanged with BEAM nodes
//! - Persistent storage of Erlang terms
//!
//! ## Modules
//!
//! - **[`options`](options/index.html)**: `EncodeOptions`, the encoder configuration
//!
//! - **[`encoding`](encoding/index.html)**: Top-level encoding
//!   (magic byte, compression envelope)
//!
//! - **[`decoding`](decoding/index.html)**: Top-level decoding
//!   (magic check, envelope inflation, strict and partial decode)
//!
//! - **[`size_calculation`](size_calculation/index.html)**: Exact encoded size
//!   (erts_encode_ext_size, encode_size_struct_int)
//!
//! ## Architecture
//!
//! This crate is based on the C implementation in `external.c`. It depends on:
//! - `infrastructure_data_handling` for the recursive term codec
//! - `infrastructure_utilities` for zlib
//! - `infrastructure_ei_primitives` for tags and errors
//!
//! ## See Also
//!
//! - [`infrastructure_data_handling`](../infrastructure_data_handling/index.html): Term encoding/decoding
//! - [`api_facades`](../../api_facades/index.html): The public entry points

pub mod options;
pub mod encoding;
pub mod decoding;
pub mod size_calculation;

pub use options::EncodeOptions;
pub use encoding::erts_encode_ext;
pub use decoding::{erts_decode_ext, erts_decode_ext_exact};
pub use size_calculation::{encode_size_struct_int, erts_encode_ext_size};
pub use infrastructure_ei_primitives::constants::VERSION_MAGIC;
