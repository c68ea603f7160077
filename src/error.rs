//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; these cover the HTTP client and the command layer.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The request could not be sent or its body could not be read
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Upstream { status: u16, url: String },

    /// The API has no resource at this URL
    #[error("Not found: {0}")]
    NotFound(String),

    /// The response body did not match the expected shape
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command was invoked with bad arguments
    #[error("Usage: {0}")]
    Usage(String),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PokedexError::Upstream {
            status: 500,
            url: "https://pokeapi.co/api/v2/location-area".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 500 from https://pokeapi.co/api/v2/location-area"
        );

        let err = PokedexError::Usage("explore <location-area>".to_string());
        assert_eq!(err.to_string(), "Usage: explore <location-area>");
    }

    #[test]
    fn test_decode_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PokedexError = json_err.into();
        assert!(matches!(err, PokedexError::Decode(_)));
    }
}
