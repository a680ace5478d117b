use thiserror::Error;

/// Errors raised while loading configuration or guarding analyzer input.
///
/// The analyzers themselves never fail: every string, including the empty
/// one, has a well-defined result.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("bias '{bias}': invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        bias: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("message text is {len} bytes, limit is {max}")]
    TextTooLong { len: usize, max: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
