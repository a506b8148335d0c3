//! Infrastructure Layer: EI Primitives
//!
//! Provides the tag table, the error taxonomy and the fixed-width field
//! codecs of the external term format. Everything above this crate builds
//! recursive encoders and decoders out of these pieces.
//!
//! ## Overview
//!
//! Every decoder in this crate follows the same discipline: it receives the
//! bytes that follow an already-consumed tag and returns `(value, tail)`,
//! where `tail` is the unconsumed rest of the input. Composite decoders chain
//! these calls, so no caller ever tracks an explicit position.
//!
//! ## Modules
//!
//! - **[`constants`](constants/index.html)**: Tag bytes, the version magic byte and field limits
//! - **[`error`](error/index.html)**: `EncodeError` and `DecodeError`
//! - **[`reader`](reader/index.html)**: Bounds-checked, tail-returning reads
//! - **[`encode_integers`](encode_integers/index.html)**: `SMALL_INTEGER_EXT` and `INTEGER_EXT`
//! - **[`decode_integers`](decode_integers/index.html)**: Their decoders
//! - **[`encode_double`](encode_double/index.html)**: `NEW_FLOAT_EXT` and the 31-byte `FLOAT_EXT`
//! - **[`decode_double`](decode_double/index.html)**: Their decoders
//! - **[`encode_headers`](encode_headers/index.html)**: Tuple, list and nil headers
//! - **[`decode_headers`](decode_headers/index.html)**: Header decoders and the list terminator check
//!
//! ## Architecture
//!
//! This crate is based on the C implementation in `lib/erl_interface/src/encode/*.c` and
//! `lib/erl_interface/src/decode/*.c`. It depends on the Entities layer only for the
//! atom error conversion.
//!
//! ## See Also
//!
//! - [`infrastructure_data_handling`](../infrastructure_data_handling/index.html): Term encoding/decoding
//! - [`infrastructure_bignum_encoding`](../infrastructure_bignum_encoding/index.html): Big integer codec

pub mod constants;
pub mod error;
pub mod reader;
pub mod encode_integers;
pub mod decode_integers;
pub mod encode_double;
pub mod decode_double;
pub mod encode_headers;
pub mod decode_headers;

pub use error::{DecodeError, EncodeError};
pub use encode_double::FloatFormat;
