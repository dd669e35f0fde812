// TMDB discover client
// API Documentation: https://developer.themoviedb.org/reference/discover-movie

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::discover::query::DiscoverQuery;

const TMDB_DISCOVER_BASE: &str = "https://api.themoviedb.org/3/discover";
const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Posters kept from one discover page.
const RESULT_LIMIT: usize = 25;

/// TMDB API client
pub struct TmdbClient {
    client: Client,
    bearer_token: String,
}

/// Discover response envelope
#[derive(Debug, Deserialize)]
pub struct DiscoverResults {
    pub results: Vec<DiscoverEntry>,
}

/// One discover result. Movies carry `title`, tv series carry `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverEntry {
    pub id: i64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
}

/// Display-ready card for the results grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PosterCard {
    pub poster_url: String,
    pub title: String,
    pub description: String,
}

impl TmdbClient {
    /// Create a new TMDB client
    pub fn new(bearer_token: String) -> Self {
        Self {
            client: Client::new(),
            bearer_token,
        }
    }

    /// Fetch one discover page for the derived query and map it into
    /// display cards.
    pub async fn discover(&self, query: &DiscoverQuery) -> Result<Vec<PosterCard>> {
        let url = format!("{}/{}", TMDB_DISCOVER_BASE, query.path());
        tracing::debug!("Discover request: {}", url);

        let response: DiscoverResults = self
            .client
            .get(&url)
            .bearer_auth(&self.bearer_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .context("Failed to query TMDB discover")?
            .error_for_status()
            .context("TMDB discover returned an error status")?
            .json()
            .await
            .context("Failed to parse TMDB discover response")?;

        Ok(map_results(response.results))
    }
}

/// Keep entries that have a poster, cap the page, and fill in display
/// fallbacks for missing titles and overviews.
fn map_results(results: Vec<DiscoverEntry>) -> Vec<PosterCard> {
    results
        .into_iter()
        .filter(|entry| {
            entry
                .poster_path
                .as_deref()
                .map(|path| !path.is_empty())
                .unwrap_or(false)
        })
        .take(RESULT_LIMIT)
        .map(|entry| PosterCard {
            poster_url: format!(
                "{}{}",
                TMDB_IMAGE_BASE,
                entry.poster_path.unwrap_or_default()
            ),
            title: entry
                .title
                .or(entry.name)
                .unwrap_or_else(|| "Untitled".to_string()),
            description: entry
                .overview
                .unwrap_or_else(|| "No description available.".to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(poster: Option<&str>, title: Option<&str>, name: Option<&str>) -> DiscoverEntry {
        DiscoverEntry {
            id: 1,
            title: title.map(str::to_string),
            name: name.map(str::to_string),
            overview: None,
            poster_path: poster.map(str::to_string),
        }
    }

    #[test]
    fn test_entries_without_poster_are_dropped() {
        let cards = map_results(vec![
            entry(Some("/a.jpg"), Some("A"), None),
            entry(None, Some("B"), None),
            entry(Some(""), Some("C"), None),
        ]);

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].poster_url, "https://image.tmdb.org/t/p/w500/a.jpg");
    }

    #[test]
    fn test_page_is_capped_at_25() {
        let entries: Vec<DiscoverEntry> = (0..40)
            .map(|i| entry(Some("/p.jpg"), Some(&format!("Movie {}", i)), None))
            .collect();
        assert_eq!(map_results(entries).len(), 25);
    }

    #[test]
    fn test_title_falls_back_to_name_then_untitled() {
        let cards = map_results(vec![
            entry(Some("/a.jpg"), Some("The Movie"), Some("The Series")),
            entry(Some("/b.jpg"), None, Some("The Series")),
            entry(Some("/c.jpg"), None, None),
        ]);

        assert_eq!(cards[0].title, "The Movie");
        assert_eq!(cards[1].title, "The Series");
        assert_eq!(cards[2].title, "Untitled");
    }

    #[test]
    fn test_missing_overview_gets_placeholder() {
        let mut with_overview = entry(Some("/a.jpg"), Some("A"), None);
        with_overview.overview = Some("A fine film.".to_string());

        let cards = map_results(vec![with_overview, entry(Some("/b.jpg"), Some("B"), None)]);
        assert_eq!(cards[0].description, "A fine film.");
        assert_eq!(cards[1].description, "No description available.");
    }
}
