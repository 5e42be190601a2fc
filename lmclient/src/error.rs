use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid api url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("api url cannot be used as a base: {0}")]
    NotABase(String),
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}
