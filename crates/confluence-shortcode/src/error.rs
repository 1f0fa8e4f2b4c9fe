//! Error types for short code encoding and decoding.

use std::num::{ParseIntError, TryFromIntError};

/// Error when a page id cannot be turned into a short code.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// Id is negative or does not fit in 8 bytes.
    #[error("page id {value} does not fit in 8 bytes")]
    OutOfRange {
        /// Rejected value.
        value: i128,
        /// Integer conversion failure.
        #[source]
        source: TryFromIntError,
    },

    /// Input is not a decimal integer.
    #[error("invalid page id {input:?}")]
    InvalidNumber {
        /// Rejected input text.
        input: String,
        /// Parse failure.
        #[source]
        source: ParseIntError,
    },
}

/// Error when a short code cannot be turned back into a page id.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// Trailing `=` padding that no base64 group can end with.
    #[error("invalid padding in short code {code:?}")]
    Padding {
        /// Rejected short code.
        code: String,
    },

    /// Symbol outside the base64 alphabet.
    #[error("invalid base64 in short code {code:?}")]
    Base64 {
        /// Rejected short code.
        code: String,
        /// Base64 failure.
        #[source]
        source: base64::DecodeError,
    },

    /// Short code carries more than 64 bits of data.
    #[error("short code {code:?} decodes to {len} bytes, id is limited to 8")]
    Overflow {
        /// Rejected short code.
        code: String,
        /// Number of decoded bytes.
        len: usize,
    },
}

/// Error when a tiny URL cannot be resolved to a page id.
#[derive(Debug, thiserror::Error)]
pub enum ShortUrlError {
    /// URL has no `/x/` segment.
    #[error("not a tiny URL: {url}")]
    MissingMarker {
        /// Rejected URL.
        url: String,
    },

    /// URL is not under the expected base URL.
    #[error("{url} is not a tiny URL under {base_url}")]
    ForeignBase {
        /// Rejected URL.
        url: String,
        /// Base URL the tiny URL was expected under.
        base_url: String,
    },

    /// Code after `/x/` is not a valid short code.
    #[error("invalid short code in tiny URL")]
    Decode(#[from] DecodeError),
}
