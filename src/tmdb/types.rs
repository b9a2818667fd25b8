//! Wire types for the TMDB v3 endpoints the app reads.
//!
//! Every scalar that TMDB may omit or send as `null` is an `Option`, and every
//! sequence defaults to empty, so a sparse record still decodes.

use serde::Deserialize;

/// Abbreviated record used by the home listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub original_language: String,
}

/// One page of `discover/movie`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieListResponse {
    #[serde(default)]
    pub results: Vec<MovieSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductionCompany {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Video {
    #[serde(rename = "type")]
    pub video_type: String,
    pub site: String,
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Videos {
    #[serde(default)]
    pub results: Vec<Video>,
}

/// Full record from `movie/{id}?append_to_response=videos`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    /// 0 means TMDB has no figure.
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub videos: Videos,
}

impl MovieDetail {
    /// First YouTube trailer in the order TMDB returned them.
    pub fn trailer(&self) -> Option<&Video> {
        self.videos
            .results
            .iter()
            .find(|v| v.video_type == "Trailer" && v.site == "YouTube")
    }
}

/// Error body TMDB sends with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    #[serde(default)]
    pub status_code: i64,
    #[serde(default)]
    pub status_message: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    fn video(video_type: &str, site: &str, key: &str) -> Video {
        Video {
            video_type: video_type.to_string(),
            site: site.to_string(),
            key: key.to_string(),
        }
    }

    #[test]
    fn trailer_is_first_youtube_trailer() {
        // Arrange
        let mut detail: MovieDetail = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        detail.videos.results = vec![
            video("Teaser", "YouTube", "A"),
            video("Trailer", "YouTube", "B"),
            video("Trailer", "Vimeo", "C"),
        ];

        // Act
        let trailer = detail.trailer();

        // Assert
        assert_eq!(trailer.map(|v| v.key.as_str()), Some("B"));
    }

    #[test]
    fn trailer_keeps_returned_order() {
        let mut detail: MovieDetail = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        detail.videos.results = vec![
            video("Trailer", "YouTube", "second-by-date"),
            video("Trailer", "YouTube", "first-by-date"),
        ];

        assert_eq!(detail.trailer().unwrap().key, "second-by-date");
    }

    #[test]
    fn no_trailer_when_nothing_matches() {
        let mut detail: MovieDetail = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        detail.videos.results = vec![video("Clip", "YouTube", "X"), video("Trailer", "Vimeo", "Y")];

        assert!(detail.trailer().is_none());
    }

    #[test]
    fn detail_decodes_full_record() {
        // Arrange
        let json = r#"{
            "id": 550,
            "title": "Fight Club",
            "tagline": "Mischief. Mayhem. Soap.",
            "overview": "A ticking-time-bomb insomniac...",
            "release_date": "1999-10-15",
            "runtime": 139,
            "original_language": "en",
            "vote_average": 8.433,
            "status": "Released",
            "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
            "genres": [{"id": 18, "name": "Drama"}],
            "production_companies": [{"id": 508, "name": "Regency Enterprises", "logo_path": null}],
            "budget": 63000000,
            "revenue": 100853753,
            "videos": {"results": [
                {"type": "Trailer", "site": "YouTube", "key": "BdJKm16Co6M", "name": "Trailer"}
            ]}
        }"#;

        // Act
        let detail: MovieDetail = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(detail.id, 550);
        assert_eq!(detail.runtime, Some(139));
        assert_eq!(detail.genres[0].name, "Drama");
        assert_eq!(detail.production_companies[0].id, 508);
        assert_eq!(detail.budget, 63_000_000);
        assert_eq!(detail.trailer().unwrap().key, "BdJKm16Co6M");
    }

    #[test]
    fn detail_tolerates_missing_and_null_fields() {
        let json = r#"{"id": 7, "title": "Sparse", "tagline": null, "vote_average": null}"#;

        let detail: MovieDetail = serde_json::from_str(json).unwrap();

        assert!(detail.tagline.is_none());
        assert!(detail.vote_average.is_none());
        assert!(detail.genres.is_empty());
        assert!(detail.production_companies.is_empty());
        assert!(detail.videos.results.is_empty());
        assert_eq!(detail.budget, 0);
    }

    #[test]
    fn summary_listing_decodes() {
        let json = r#"{"page": 1, "results": [
            {"id": 1, "title": "One", "vote_average": 7.1, "poster_path": "/one.jpg",
             "release_date": "2024-03-01", "original_language": "en"},
            {"id": 2, "title": "Two", "poster_path": null, "original_language": "fr"}
        ]}"#;

        let listing: MovieListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(listing.results.len(), 2);
        assert_eq!(listing.results[1].poster_path, None);
        assert_eq!(listing.results[1].original_language, "fr");
    }
}
