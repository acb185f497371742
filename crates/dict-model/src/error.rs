use thiserror::Error;

/// Inconsistent or unusable request configuration.
///
/// Always raised before any network activity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("proxy host and proxy port must be given together")]
    IncompleteProxyAddress,

    #[error("proxy username and password must be given together")]
    IncompleteProxyCredentials,

    #[error("invalid proxy URL '{url}': {reason}")]
    InvalidProxyUrl { url: String, reason: String },

    #[error("unsupported language code: {0} (supported: de, en, es, fr, it)")]
    UnsupportedLanguage(String),

    #[error("nothing to translate: query is empty")]
    EmptyQuery,
}
