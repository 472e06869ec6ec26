//! Caller-side codecs for the identity registry.
//!
//! The registry stores text as fixed-width byte fields and document hashes as raw
//! 32-byte arrays. Everything here runs off-chain, before a transaction is built or
//! after a query result comes back.

pub mod call_data;
pub mod text;

pub use call_data::{encode_call, top_encode_bool, top_encode_hashes, top_encode_u8, AbiError};
pub use text::{
    decode_field, encode_field, format_hash, hex_to_utf8, parse_hash, utf8_to_hex,
    EncodingError, FIELD_WIDTH, HASH_WIDTH,
};
