//! Infrastructure Layer: Bignum Encoding
//!
//! Provides integer encoding and decoding for the external term format,
//! covering every integer width from a single byte up to arbitrary precision.
//!
//! ## Overview
//!
//! The `infrastructure_bignum_encoding` crate is part of the infrastructure layer in
//! the CLEAN architecture layout. It chooses the narrowest wire form for a
//! `BigNumber` and turns `SMALL_BIG_EXT` / `LARGE_BIG_EXT` bodies back into
//! `BigNumber` values.
//!
//! ## Codecs
//!
//! - **[`bignum_codec`](bignum_codec/index.html)**: Codec for arbitrary precision integers.
//!   Handles `SMALL_INTEGER_EXT`, `INTEGER_EXT`, `SMALL_BIG_EXT` and `LARGE_BIG_EXT`.
//!
//! ## Architecture
//!
//! This crate is based on the C implementation in `decode_big.c` and `encode_bignum.c`.
//! It depends on the Entities layer for `BigNumber` and on the EI primitives for the
//! fixed-width fields.
//!
//! ## See Also
//!
//! - [`entities_utilities`](../../entities/entities_utilities/index.html): BigNumber type
//! - [`infrastructure_ei_primitives`](../infrastructure_ei_primitives/index.html): Tags and field codecs

pub mod bignum_codec;

pub use bignum_codec::BignumCodec;
