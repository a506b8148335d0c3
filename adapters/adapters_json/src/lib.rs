//! Adapters Layer: JSON
//!
//! Lets callers that already hold `serde_json::Value` data encode it as
//! external term format without building `Term` values by hand.
//!
//! ## Overview
//!
//! The `adapters_json` crate is part of the adapters layer in the CLEAN
//! architecture layout. JSON is an open host representation: it has kinds
//! (`null`, booleans, objects) that the term codec has no rule for, and those
//! are reported as `EncodeError::UnsupportedType`.
//!
//! ## Modules
//!
//! - **[`json_terms`](json_terms/index.html)**: Conversions between JSON values
//!   and terms, and a one-call JSON encoder
//!
//! ## See Also
//!
//! - [`infrastructure_external_format`](../../infrastructure/infrastructure_external_format/index.html): Framing and compression

pub mod json_terms;

pub use json_terms::{encode_json, term_from_json, term_to_json};
