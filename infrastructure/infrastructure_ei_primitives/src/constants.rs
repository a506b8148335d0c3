//! External Term Format Constants
//!
//! Defines the tag constants used by the external term format.
//! These match the constants defined in lib/erl_interface/src/eidef.h and
//! erts/emulator/beam/external.h

/// Version magic byte that prefixes every top-level buffer
pub const VERSION_MAGIC: u8 = 131;

/// New float (IEEE 754, 8 bytes)
pub const NEW_FLOAT_EXT: u8 = 70;

/// Compressed envelope
pub const COMPRESSED_EXT: u8 = 80;

/// Small integer (0-255)
pub const ERL_SMALL_INTEGER_EXT: u8 = 97;

/// Integer (32-bit signed)
pub const ERL_INTEGER_EXT: u8 = 98;

/// Float (old format, 31 bytes)
pub const ERL_FLOAT_EXT: u8 = 99;

/// Atom (2-byte length)
pub const ERL_ATOM_EXT: u8 = 100;

/// Small tuple (arity <= 255)
pub const ERL_SMALL_TUPLE_EXT: u8 = 104;

/// Large tuple (arity > 255)
pub const ERL_LARGE_TUPLE_EXT: u8 = 105;

/// Nil (empty list)
pub const ERL_NIL_EXT: u8 = 106;

/// String (2-byte length, legacy byte list)
pub const ERL_STRING_EXT: u8 = 107;

/// List
pub const ERL_LIST_EXT: u8 = 108;

/// Binary
pub const ERL_BINARY_EXT: u8 = 109;

/// Small big integer (arity <= 255 bytes)
pub const ERL_SMALL_BIG_EXT: u8 = 110;

/// Large big integer (arity > 255 bytes)
pub const ERL_LARGE_BIG_EXT: u8 = 111;

/// Minimum value representable by `INTEGER_EXT`
pub const ERL_MIN: i64 = i32::MIN as i64;

/// Maximum value representable by `INTEGER_EXT`
pub const ERL_MAX: i64 = i32::MAX as i64;

/// Largest count or length that fits a 1-byte field
pub const MAX_U8_FIELD: usize = u8::MAX as usize;

/// Largest count or length that fits a 2-byte field
pub const MAX_U16_FIELD: usize = u16::MAX as usize;

/// Largest count or length that fits a 4-byte field
pub const MAX_U32_FIELD: usize = u32::MAX as usize;

/// Width of the `FLOAT_EXT` text field
pub const FLOAT_EXT_WIDTH: usize = 31;

/// Digits after the decimal point in the `FLOAT_EXT` text
pub const FLOAT_EXT_PRECISION: usize = 20;
