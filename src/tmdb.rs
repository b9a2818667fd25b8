//! TMDB API access: wire types and the blocking HTTP client.

mod client;
pub mod types;

pub use client::{MovieApi, TmdbClient};
pub use types::{MovieDetail, MovieSummary};
