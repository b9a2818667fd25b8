use thiserror::Error;

/// Failure of a single TMDB or CDN request.
///
/// This is the only error the views handle: it is logged and the view keeps
/// showing its loading indicator.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {path} failed: {source}")]
    Http {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("TMDB returned HTTP {status} for {path}: {message}")]
    Status {
        path: String,
        status: u16,
        message: String,
    },

    #[error("could not decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not build URL for {path}: {source}")]
    Url {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("movie identifier {id:?} cannot be sent as a path segment")]
    DotSegmentId { id: String },

    #[error("could not decode poster image: {0}")]
    Image(#[from] image::ImageError),
}

/// Problems reading the environment at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
}
