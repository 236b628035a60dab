use thiserror::Error;

/// Failures of the command line client, one variant per stage that can fail
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Connection(String),

    #[error("{0}")]
    StatusCode(String),

    #[error("{0}")]
    Response(String),

    #[error("{0}")]
    Authentication(String),
}

impl CliError {
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Configuration(_) => "CONFIGURATION_ERROR",
            CliError::Connection(_) => "CONNECTION_ERROR",
            CliError::StatusCode(_) => "STATUS_CODE_ERROR",
            CliError::Response(_) => "RESPONSE_ERROR",
            CliError::Authentication(_) => "AUTHENTICATION_ERROR",
        }
    }
}
