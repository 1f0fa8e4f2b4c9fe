//! `shortcode encode` command implementation.

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the encode command.
#[derive(Args)]
pub(crate) struct EncodeArgs {
    /// Page ids to encode (decimal).
    #[arg(required = true, allow_negative_numbers = true)]
    ids: Vec<String>,
}

impl EncodeArgs {
    /// Execute the encode command, printing one short code per id.
    ///
    /// # Errors
    ///
    /// Returns an error for the first id that is not a valid 64-bit page id.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        tracing::debug!(count = self.ids.len(), "Encoding page ids");
        for code in self.codes()? {
            output.result(&code);
        }
        Ok(())
    }

    fn codes(&self) -> Result<Vec<String>, CliError> {
        self.ids
            .iter()
            .map(|id| confluence_shortcode::encode_str(id).map_err(CliError::from))
            .collect()
    }
}
