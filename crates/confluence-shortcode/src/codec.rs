//! Page id to short code conversion.
//!
//! The wire form is fixed to little-endian regardless of the host, so
//! codes produced on one machine resolve on any other.

use base64::Engine;
use base64::prelude::BASE64_STANDARD;

use crate::error::{DecodeError, EncodeError};

/// Width of a packed page id.
const ID_BYTES: usize = 8;

/// Base64 symbol for six zero bits.
const ZERO_SYMBOL: char = 'A';

/// Base64 padding character.
const PAD: char = '=';

/// Longest `=` run a base64 group can end with.
const MAX_PADDING: usize = 2;

/// Encode a page id as a short code.
///
/// Trailing zero bytes become trailing `A` symbols, which are dropped
/// along with the `=` padding. `encode(0)` is the empty string.
pub fn encode(id: u64) -> String {
    let encoded = BASE64_STANDARD.encode(id.to_le_bytes());
    let code = encoded.trim_end_matches([PAD, ZERO_SYMBOL]).to_owned();
    tracing::debug!(id, %encoded, %code, "Encoded short code");
    code
}

/// Encode any integer that fits in 64 unsigned bits.
///
/// # Errors
///
/// Returns [`EncodeError::OutOfRange`] for negative values and values
/// above `u64::MAX`.
pub fn try_encode(id: impl Into<i128>) -> Result<String, EncodeError> {
    let value = id.into();
    match u64::try_from(value) {
        Ok(id) => Ok(encode(id)),
        Err(source) => {
            tracing::error!(value = %value, error = %source, "Failed to encode short code");
            Err(EncodeError::OutOfRange { value, source })
        }
    }
}

/// Encode a page id given as decimal text.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidNumber`] if the text is not an integer and
/// [`EncodeError::OutOfRange`] if it does not fit in 64 unsigned bits.
pub fn encode_str(input: &str) -> Result<String, EncodeError> {
    let input = input.trim();
    let value: i128 = input.parse().map_err(|source| {
        tracing::error!(input, error = %source, "Failed to parse page id");
        EncodeError::InvalidNumber {
            input: input.to_owned(),
            source,
        }
    })?;
    try_encode(value)
}

/// Decode a short code back into a page id.
///
/// Accepts codes with any number of the trailing `A` symbols that
/// [`encode`] strips. A code that carries `=` padding (possibly short of a
/// full group) must be canonical base64 once the padding is completed.
///
/// # Errors
///
/// Returns [`DecodeError`] if the code is not base64 or holds more than
/// 64 bits of data.
pub fn decode(code: &str) -> Result<u64, DecodeError> {
    decode_bytes(code).inspect_err(|e| {
        tracing::error!(code, error = %e, "Failed to decode short code");
    })
}

fn decode_bytes(code: &str) -> Result<u64, DecodeError> {
    let symbols = code.trim_end_matches(PAD);
    let padding = code.len() - symbols.len();
    if padding > MAX_PADDING || (padding > 0 && symbols.is_empty()) {
        return Err(DecodeError::Padding {
            code: code.to_owned(),
        });
    }

    // Padded input is taken as written and completed with `=`, so a last
    // symbol with stray bits is rejected. Unpadded input is zero-extended at
    // symbol granularity so the partial bits held by the last symbol survive;
    // they belong to the next byte of the id.
    let fill = if padding > 0 { PAD } else { ZERO_SYMBOL };
    let mut extended = String::with_capacity(code.len() + 3);
    extended.push_str(if padding > 0 { code } else { symbols });
    while extended.len() % 4 != 0 {
        extended.push(fill);
    }

    let mut bytes = BASE64_STANDARD
        .decode(&extended)
        .map_err(|source| DecodeError::Base64 {
            code: code.to_owned(),
            source,
        })?;
    tracing::debug!(code, ?bytes, "Decoded short code");

    if bytes
        .get(ID_BYTES..)
        .is_some_and(|extra| extra.iter().any(|&b| b != 0))
    {
        return Err(DecodeError::Overflow {
            code: code.to_owned(),
            len: bytes.len(),
        });
    }

    bytes.resize(ID_BYTES, 0);
    tracing::debug!(?bytes, "Extended short code to 8 bytes");

    let mut packed = [0u8; ID_BYTES];
    packed.copy_from_slice(&bytes);
    Ok(u64::from_le_bytes(packed))
}
