//! Transport and decoding failures surfaced by API adapters.

/// Failure of one endpoint call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No transport exists on the current target.
    Unavailable,
    /// The request could not be sent or the body could not be read.
    Network(String),
    /// The server answered with a non-success HTTP status.
    Status {
        /// HTTP status code.
        status: u16,
        /// Request path.
        path: String,
    },
    /// The body is not the JSON shape the endpoint promises.
    Decode {
        /// Request path.
        path: String,
        /// Decoder message.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => f.write_str("network API unavailable on this target"),
            Self::Network(message) => write!(f, "network error: {message}"),
            Self::Status { status, path } => write!(f, "`{path}` answered HTTP {status}"),
            Self::Decode { path, message } => {
                write!(f, "unexpected response from `{path}`: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_path() {
        let err = ApiError::Status {
            status: 404,
            path: "equipment/10.0.0.9/".to_string(),
        };
        assert_eq!(err.to_string(), "`equipment/10.0.0.9/` answered HTTP 404");
        assert_eq!(
            ApiError::Network("offline".to_string()).to_string(),
            "network error: offline"
        );
    }
}
