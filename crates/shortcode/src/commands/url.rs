//! `shortcode url` command implementation.

use std::path::PathBuf;

use clap::Args;
use confluence_shortcode_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the url command.
#[derive(Args)]
pub(crate) struct UrlArgs {
    /// Page id (decimal).
    #[arg(allow_negative_numbers = true)]
    id: String,

    /// Confluence base URL (overrides config).
    #[arg(short = 'u', long, env = "CONFLUENCE_BASE_URL")]
    base_url: Option<String>,

    /// Path to configuration file (default: auto-discover shortcode.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl UrlArgs {
    /// Execute the url command.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid base URL is configured or the id is invalid.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            base_url: self.base_url,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let confluence = config.require_confluence()?;
        tracing::debug!(
            base_url = %confluence.base_url,
            config_path = ?config.config_path,
            "Using Confluence base URL"
        );

        let url = tiny_url(&confluence.base_url, &self.id)?;
        output.result(&url);
        Ok(())
    }
}

/// Build the tiny URL for a decimal page id.
fn tiny_url(base_url: &str, id: &str) -> Result<String, CliError> {
    let code = confluence_shortcode::encode_str(id)?;
    Ok(confluence_shortcode::short_url(base_url, &code))
}
