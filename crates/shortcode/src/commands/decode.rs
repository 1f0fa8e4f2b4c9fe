//! `shortcode decode` command implementation.

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the decode command.
#[derive(Args)]
pub(crate) struct DecodeArgs {
    /// Short codes to decode.
    #[arg(required = true)]
    codes: Vec<String>,
}

impl DecodeArgs {
    /// Execute the decode command, printing one page id per code.
    ///
    /// # Errors
    ///
    /// Returns an error for the first code that is not a valid short code.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        tracing::debug!(count = self.codes.len(), "Decoding short codes");
        for id in self.ids()? {
            output.result(&id.to_string());
        }
        Ok(())
    }

    fn ids(&self) -> Result<Vec<u64>, CliError> {
        self.codes
            .iter()
            .map(|code| confluence_shortcode::decode(code).map_err(CliError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_ids() {
        let args = DecodeArgs {
            codes: vec!["0gKWSQ".to_owned(), "AQ==".to_owned(), "B".to_owned()],
        };
        assert_eq!(args.ids().unwrap(), vec![1_234_567_890, 1, 4]);
    }

    #[test]
    fn test_ids_rejects_invalid() {
        let args = DecodeArgs {
            codes: vec!["!!!not-base64!!!".to_owned()],
        };
        let err = args.ids().unwrap_err();
        assert!(matches!(err, CliError::Decode(_)), "{err:?}");
    }
}
