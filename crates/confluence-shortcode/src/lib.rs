//! Confluence short codes and tiny URLs.
//!
//! Confluence links to a page through a tiny URL of the form
//! `<base_url>/x/<code>`, where the code is the page id packed into
//! 8 little-endian bytes, base64 encoded, with the `=` padding and
//! trailing `A` symbols removed.
//!
//! - [`encode`] / [`decode`]: convert between page ids and short codes
//! - [`try_encode`] / [`encode_str`]: encode ids that may not fit in 64 bits
//! - [`short_url`] / [`parse_short_url`] / [`parse_short_url_with_base`]:
//!   build and resolve tiny URLs
//!
//! # Example
//!
//! ```
//! use confluence_shortcode::{decode, encode, page_short_url, parse_short_url};
//!
//! let code = encode(1_234_567_890);
//! assert_eq!(code, "0gKWSQ");
//! assert_eq!(decode(&code)?, 1_234_567_890);
//!
//! let url = page_short_url("https://wiki.example.com/", 1_234_567_890);
//! assert_eq!(url, "https://wiki.example.com/x/0gKWSQ");
//! assert_eq!(parse_short_url(&url)?, 1_234_567_890);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod codec;
pub mod error;
mod url;

pub use codec::{decode, encode, encode_str, try_encode};
pub use error::{DecodeError, EncodeError, ShortUrlError};
pub use url::{page_short_url, parse_short_url, parse_short_url_with_base, short_url};
