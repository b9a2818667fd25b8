//! Blocking TMDB client.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::types::{MovieDetail, MovieListResponse, MovieSummary, TmdbErrorResponse};
use crate::config::DEFAULT_API_BASE;
use crate::error::FetchError;

/// Data source for both views. Implemented by [`TmdbClient`] and by fakes in tests.
pub trait MovieApi: Send + Sync {
    /// Popular movies for the home listing.
    fn discover_movies(&self) -> Result<Vec<MovieSummary>, FetchError>;

    /// Full record for one movie, with its videos appended.
    ///
    /// `id` is the route segment as typed; it is passed through unparsed.
    fn movie_detail(&self, id: &str) -> Result<MovieDetail, FetchError>;

    /// Raw bytes of an image on the CDN.
    fn image_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

#[derive(Debug)]
pub struct TmdbClient {
    http_client: Client,
    base_url: Url,
    api_token: String,
}

/// Builder for `TmdbClient`.
#[derive(Debug, Default)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_token: Option<String>,
    timeout: Option<Duration>,
}

impl TmdbClientBuilder {
    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Connect timeout. Requests themselves are not bounded.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<TmdbClient, FetchError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_API_BASE).map_err(|source| FetchError::Url {
                path: DEFAULT_API_BASE.to_string(),
                source,
            })?,
        };

        let mut builder = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>);
        if let Some(timeout) = self.timeout {
            builder = builder.connect_timeout(timeout);
        }
        let http_client = builder.build().map_err(|source| FetchError::Http {
            path: base_url.to_string(),
            source,
        })?;

        Ok(TmdbClient {
            http_client,
            base_url,
            api_token: self.api_token.unwrap_or_default(),
        })
    }
}

impl TmdbClient {
    #[must_use]
    pub fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::default()
    }

    /// GET with bearer auth; decodes the body as JSON whatever the content type says.
    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = self.base_url.join(path).map_err(|source| FetchError::Url {
            path: path.to_string(),
            source,
        })?;

        let http_err = |source| FetchError::Http {
            path: path.to_string(),
            source,
        };

        debug!(%url, "TMDB API request");
        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.api_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query)
            .send()
            .map_err(http_err)?;

        let status = response.status();
        let body = response.text().map_err(http_err)?;

        if !status.is_success() {
            let message = serde_json::from_str::<TmdbErrorResponse>(&body)
                .map(|e| e.status_message)
                .unwrap_or(body);
            return Err(FetchError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

impl MovieApi for TmdbClient {
    #[instrument(skip(self))]
    fn discover_movies(&self) -> Result<Vec<MovieSummary>, FetchError> {
        let listing: MovieListResponse =
            self.get_json("discover/movie", &[("sort_by", "popularity.desc")])?;
        Ok(listing.results)
    }

    #[instrument(skip(self))]
    fn movie_detail(&self, id: &str) -> Result<MovieDetail, FetchError> {
        // URL parsing collapses `.` and `..` segments, which would request a different resource.
        if matches!(id, "." | "..") {
            return Err(FetchError::DotSegmentId { id: id.to_string() });
        }
        let path = format!("movie/{}", urlencoding::encode(id));
        self.get_json(&path, &[("append_to_response", "videos")])
    }

    #[instrument(skip(self))]
    fn image_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let http_err = |source| FetchError::Http {
            path: url.to_string(),
            source,
        };
        let response = self.http_client.get(url).send().map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                path: url.to_string(),
                status: status.as_u16(),
                message: String::from("poster download failed"),
            });
        }

        let bytes = response.bytes().map_err(http_err)?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    const DETAIL_JSON: &str = r#"{
        "id": 42,
        "title": "The Answer",
        "genres": [],
        "production_companies": [],
        "budget": 0,
        "revenue": 1000000,
        "videos": {"results": [{"type": "Trailer", "site": "YouTube", "key": "abc123"}]}
    }"#;

    // The blocking client owns its own runtime, so it is built, used and
    // dropped on a blocking thread.
    async fn detail_via_http(
        server: &wiremock::MockServer,
        id: &'static str,
    ) -> Result<MovieDetail, FetchError> {
        let base_url = format!("{}/3/", server.uri());
        tokio::task::spawn_blocking(move || {
            let client = TmdbClient::builder()
                .base_url(base_url.parse().unwrap())
                .api_token("test-token")
                .build()
                .unwrap();
            client.movie_detail(id)
        })
        .await
        .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_movie_detail_requests_videos_with_bearer_token() {
        // Arrange
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/42"))
            .and(wiremock::matchers::query_param("append_to_response", "videos"))
            .and(wiremock::matchers::header("Authorization", "Bearer test-token"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(DETAIL_JSON))
            .expect(1)
            .mount(&server)
            .await;

        // Act
        let detail = detail_via_http(&server, "42").await.unwrap();

        // Assert
        assert_eq!(detail.id, 42);
        assert_eq!(detail.trailer().unwrap().key, "abc123");
        assert!(detail.genres.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_movie_detail_forwards_identifier_as_path_segment() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/a%20b"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(DETAIL_JSON))
            .expect(1)
            .mount(&server)
            .await;

        let detail = detail_via_http(&server, "a b").await;

        assert!(detail.is_ok());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_movie_detail_keeps_dots_inside_identifier() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/4.2"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(DETAIL_JSON))
            .expect(1)
            .mount(&server)
            .await;

        let detail = detail_via_http(&server, "4.2").await;

        assert!(detail.is_ok());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_movie_detail_dot_segment_identifier_is_never_sent() {
        // Arrange
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::any())
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(DETAIL_JSON))
            .expect(0)
            .mount(&server)
            .await;

        // Act
        let parent = detail_via_http(&server, "..").await.unwrap_err();
        let current = detail_via_http(&server, ".").await.unwrap_err();

        // Assert
        assert!(matches!(parent, FetchError::DotSegmentId { ref id } if id == ".."));
        assert!(matches!(current, FetchError::DotSegmentId { ref id } if id == "."));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_movie_detail_non_json_body_is_decode_error() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/42"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = detail_via_http(&server, "42").await.unwrap_err();

        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_movie_detail_error_status_carries_tmdb_message() {
        let server = wiremock::MockServer::start().await;
        let body = r#"{"success": false, "status_code": 34,
            "status_message": "The resource you requested could not be found."}"#;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/999999"))
            .respond_with(wiremock::ResponseTemplate::new(404).set_body_string(body))
            .mount(&server)
            .await;

        let err = detail_via_http(&server, "999999").await.unwrap_err();

        match err {
            FetchError::Status {
                status, message, ..
            } => {
                assert_eq!(status, 404);
                assert!(message.contains("could not be found"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_discover_movies_returns_results() {
        // Arrange
        let server = wiremock::MockServer::start().await;
        let body = r#"{"page": 1, "results": [
            {"id": 1, "title": "One", "vote_average": 7.456, "poster_path": "/one.jpg",
             "release_date": "2024-03-01", "original_language": "en"}
        ]}"#;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/discover/movie"))
            .and(wiremock::matchers::query_param("sort_by", "popularity.desc"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
        let base_url = format!("{}/3/", server.uri());

        // Act
        let movies = tokio::task::spawn_blocking(move || {
            let client = TmdbClient::builder()
                .base_url(base_url.parse().unwrap())
                .build()
                .unwrap();
            client.discover_movies()
        })
        .await
        .unwrap()
        .unwrap();

        // Assert
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "One");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_image_bytes_downloads_body() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/t/p/w500/abc.jpg"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
            .mount(&server)
            .await;
        let url = format!("{}/t/p/w500/abc.jpg", server.uri());
        let base = server.uri();

        let bytes = tokio::task::spawn_blocking(move || {
            let client = TmdbClient::builder()
                .base_url(format!("{base}/3/").parse().unwrap())
                .build()
                .unwrap();
            client.image_bytes(&url)
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[test]
    fn builder_defaults_to_public_api() {
        let client = TmdbClient::builder().api_token("t").build().unwrap();

        assert_eq!(client.base_url.as_str(), DEFAULT_API_BASE);
    }
}
