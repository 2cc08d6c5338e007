//! Lexical primitives for HTTP/1.x style messages: token classification,
//! header field validation, header list token search, and ASCII-compatible
//! encoding of internationalized `host[:port]` strings.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod header_values;
mod helpers;
mod host;
mod unicode;

// Public API
pub use character_sets::{is_token_byte, is_token_char};
pub use checkers::{
    is_valid_header_field_name, is_valid_header_field_value, is_valid_host_header,
};
pub use error::{EncodingError, Result};
pub use header_values::{contains_token, value_contains_token};
pub use host::{encode_host_port, split_host_port};
