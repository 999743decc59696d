use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("invalid URL in {field}: {reason}")]
    InvalidUrl { field: String, reason: String },

    #[error("the menu page could not be read: {reason}")]
    InvalidSourceFormat { reason: String },

    #[error("no arguments were given")]
    EmptyQuery,

    #[error("unknown arguments: {}", .tokens.join(", "))]
    UnknownArguments { tokens: Vec<String> },

    #[error("invalid query: {message}")]
    InvalidQuery { message: String },

    #[error("invalid profile value for {field}: {reason}")]
    InvalidProfile { field: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MenuError {
    /// Errors caused by how the command line was written. The binary reprints
    /// the usage text after these; fetch and profile errors stay bare.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            MenuError::EmptyQuery
                | MenuError::UnknownArguments { .. }
                | MenuError::InvalidQuery { .. }
        )
    }
}

impl From<reqwest::Error> for MenuError {
    fn from(err: reqwest::Error) -> Self {
        MenuError::InvalidSourceFormat {
            reason: err.to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for MenuError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        MenuError::InvalidSourceFormat {
            reason: "the response body is not valid UTF-8".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_are_classified() {
        assert!(MenuError::EmptyQuery.is_usage_error());
        assert!(MenuError::UnknownArguments {
            tokens: vec!["--nope".to_string()]
        }
        .is_usage_error());
        assert!(MenuError::InvalidQuery {
            message: "x".to_string()
        }
        .is_usage_error());

        assert!(!MenuError::InvalidSourceFormat {
            reason: "x".to_string()
        }
        .is_usage_error());
        assert!(!MenuError::Io(std::io::Error::other("x")).is_usage_error());
    }

    #[test]
    fn unknown_arguments_lists_every_token() {
        let err = MenuError::UnknownArguments {
            tokens: vec!["--nope".to_string(), "extra".to_string()],
        };
        assert_eq!(err.to_string(), "unknown arguments: --nope, extra");
    }
}
