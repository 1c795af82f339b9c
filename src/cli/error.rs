use miette::Diagnostic;
use thiserror::Error;

use crate::error::FetchError;
use crate::store::ConfigError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Error loading {collection}: {source}")]
    #[diagnostic(code(jht::cli::fetch_failed))]
    Fetch {
        collection: &'static str,
        #[source]
        #[diagnostic_source]
        source: FetchError,
    },

    #[error("Interrupted before the listing finished loading")]
    #[diagnostic(code(jht::cli::interrupted))]
    Interrupted,

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(jht::cli::output))]
    Output { message: String },
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
