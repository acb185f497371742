use dict_model::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to set up HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to reach {url}: {source}")]
    Upstream {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("dict.cc returned HTTP {status} without a body")]
    EmptyBody { status: u16 },
}
