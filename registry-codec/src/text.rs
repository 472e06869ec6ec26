use thiserror::Error;

/// Width of a textual registry field, in bytes.
pub const FIELD_WIDTH: usize = 32;

/// Width of a document hash, in bytes.
pub const HASH_WIDTH: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum EncodingError {
    #[error("text is {len} bytes long, a field holds at most {max}")]
    TooLong { len: usize, max: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("field is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("document hash must be {expected} bytes, got {actual}")]
    InvalidHashLength { expected: usize, actual: usize },
}

/// Encodes `text` as UTF-8, right-padded with zero bytes to [`FIELD_WIDTH`].
pub fn encode_field(text: &str) -> Result<[u8; FIELD_WIDTH], EncodingError> {
    let bytes = text.as_bytes();
    if bytes.len() > FIELD_WIDTH {
        return Err(EncodingError::TooLong {
            len: bytes.len(),
            max: FIELD_WIDTH,
        });
    }

    let mut field = [0u8; FIELD_WIDTH];
    field[..bytes.len()].copy_from_slice(bytes);
    Ok(field)
}

/// Decodes a field back to text, dropping the trailing zero padding.
pub fn decode_field(raw: &[u8]) -> Result<String, EncodingError> {
    Ok(String::from_utf8(trim_padding(raw).to_vec())?)
}

/// `0x`-prefixed hex of the UTF-8 bytes of `text`, unpadded.
pub fn utf8_to_hex(text: &str) -> String {
    format!("0x{}", hex::encode(text.as_bytes()))
}

/// Inverse of [`utf8_to_hex`]. Also accepts padded fields and a missing `0x` prefix.
pub fn hex_to_utf8(hex_str: &str) -> Result<String, EncodingError> {
    let bytes = hex::decode(sanitize_hex(hex_str))?;
    decode_field(&bytes)
}

pub fn parse_hash(hex_str: &str) -> Result<[u8; HASH_WIDTH], EncodingError> {
    let bytes = hex::decode(sanitize_hex(hex_str))?;
    <[u8; HASH_WIDTH]>::try_from(bytes.as_slice()).map_err(|_| EncodingError::InvalidHashLength {
        expected: HASH_WIDTH,
        actual: bytes.len(),
    })
}

pub fn format_hash(hash: &[u8; HASH_WIDTH]) -> String {
    format!("0x{}", hex::encode(hash))
}

fn trim_padding(raw: &[u8]) -> &[u8] {
    let end = raw.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    &raw[..end]
}

fn sanitize_hex(hex_str: &str) -> &str {
    hex_str.strip_prefix("0x").unwrap_or(hex_str)
}
