//! CLI error types.

use confluence_shortcode::{DecodeError, EncodeError, ShortUrlError};
use confluence_shortcode_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Encode(#[from] EncodeError),

    #[error("{0}")]
    Decode(#[from] DecodeError),

    #[error("{0}")]
    ShortUrl(#[from] ShortUrlError),
}
