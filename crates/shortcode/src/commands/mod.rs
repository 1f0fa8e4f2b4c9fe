//! CLI command implementations.

mod decode;
mod encode;
mod resolve;
mod url;

pub(crate) use decode::DecodeArgs;
pub(crate) use encode::EncodeArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use url::UrlArgs;
