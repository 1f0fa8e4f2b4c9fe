//! `shortcode resolve` command implementation.

use std::path::PathBuf;

use clap::Args;
use confluence_shortcode_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Tiny URL, e.g. `https://wiki.example.com/x/0gKWSQ`.
    url: String,

    /// Confluence base URL the tiny URL was built under (overrides config).
    #[arg(short = 'u', long, env = "CONFLUENCE_BASE_URL")]
    base_url: Option<String>,

    /// Path to configuration file (default: auto-discover shortcode.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not a tiny URL or its code is invalid.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            base_url: self.base_url,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let base_url = config.confluence.as_ref().map(|c| c.base_url.as_str());

        let id = page_id(base_url, &self.url)?;
        output.result(&id.to_string());
        Ok(())
    }
}

/// Extract the page id from a tiny URL, under `base_url` when one is known.
fn page_id(base_url: Option<&str>, url: &str) -> Result<u64, CliError> {
    let id = match base_url {
        Some(base_url) => {
            tracing::debug!(base_url, url, "Resolving tiny URL under base URL");
            confluence_shortcode::parse_short_url_with_base(base_url, url)?
        }
        None => {
            tracing::debug!(url, "Resolving tiny URL without base URL");
            confluence_shortcode::parse_short_url(url)?
        }
    };
    Ok(id)
}
