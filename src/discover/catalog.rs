// Filter catalog - static option tables for the discovery panel

use serde::{Deserialize, Serialize};

/// A single selectable option within a filter category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: String,
    pub name: String,
}

/// Filter categories offered by the discovery panel, in display order.
///
/// Serialized names match the labels the panel shows, so they double as the
/// wire identifiers for select/clear requests.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FilterCategory {
    #[serde(rename = "Content Type")]
    ContentType,
    Genre,
    #[serde(rename = "Watched Status")]
    WatchedStatus,
    Availability,
    #[serde(rename = "Release Year")]
    ReleaseYear,
    Duration,
    Language,
    #[serde(rename = "Rating/Maturity Level")]
    Rating,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 8] = [
        FilterCategory::ContentType,
        FilterCategory::Genre,
        FilterCategory::WatchedStatus,
        FilterCategory::Availability,
        FilterCategory::ReleaseYear,
        FilterCategory::Duration,
        FilterCategory::Language,
        FilterCategory::Rating,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            FilterCategory::ContentType => "Content Type",
            FilterCategory::Genre => "Genre",
            FilterCategory::WatchedStatus => "Watched Status",
            FilterCategory::Availability => "Availability",
            FilterCategory::ReleaseYear => "Release Year",
            FilterCategory::Duration => "Duration",
            FilterCategory::Language => "Language",
            FilterCategory::Rating => "Rating/Maturity Level",
        }
    }
}

// TMDB genre ids. Movies and tv series use separate tables; several names
// overlap but the ids are not guaranteed to match between the two.
const MOVIE_GENRES: &[(&str, &str)] = &[
    ("28", "Action"),
    ("12", "Adventure"),
    ("16", "Animation"),
    ("35", "Comedy"),
    ("80", "Crime"),
    ("99", "Documentary"),
    ("18", "Drama"),
    ("10751", "Family"),
    ("14", "Fantasy"),
    ("36", "History"),
    ("27", "Horror"),
    ("10402", "Music"),
    ("9648", "Mystery"),
    ("10749", "Romance"),
    ("878", "Science Fiction"),
    ("10770", "TV Movie"),
    ("53", "Thriller"),
    ("10752", "War"),
    ("37", "Western"),
];

const TV_GENRES: &[(&str, &str)] = &[
    ("10759", "Action & Adventure"),
    ("16", "Animation"),
    ("35", "Comedy"),
    ("80", "Crime"),
    ("99", "Documentary"),
    ("18", "Drama"),
    ("10751", "Family"),
    ("10762", "Kids"),
    ("9648", "Mystery"),
    ("10763", "News"),
    ("10764", "Reality"),
    ("10765", "Sci-Fi & Fantasy"),
    ("10766", "Soap"),
    ("10767", "Talk"),
    ("10768", "War & Politics"),
    ("37", "Western"),
];

const CONTENT_TYPES: &[(&str, &str)] = &[("movie", "Movie"), ("tv", "TV Series")];

const WATCHED_STATUSES: &[(&str, &str)] = &[("2000", "Watched"), ("1999", "Unwatched")];

const AVAILABILITIES: &[(&str, &str)] = &[("1", "Available Now"), ("2", "Coming Soon")];

const DURATIONS: &[(&str, &str)] = &[
    ("1", "< 30 minutes"),
    ("2", "30-60 minutes"),
    ("3", "1-2 hours"),
    ("4", "2+ hours"),
];

const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
];

const RATINGS: &[(&str, &str)] = &[
    ("G", "G"),
    ("PG", "PG"),
    ("PG-13", "PG-13"),
    ("R", "R"),
];

const NEWEST_RELEASE_YEAR: i32 = 2025;
const OLDEST_RELEASE_YEAR: i32 = 1969;

/// Option set for a category.
///
/// Genre is the one dynamic table: it follows the given content type and is
/// empty until a content type is chosen.
pub fn options(category: FilterCategory, content_type: Option<&str>) -> Vec<FilterOption> {
    match category {
        FilterCategory::ContentType => from_pairs(CONTENT_TYPES),
        FilterCategory::Genre => match content_type {
            Some("tv") => from_pairs(TV_GENRES),
            Some("movie") => from_pairs(MOVIE_GENRES),
            _ => Vec::new(),
        },
        FilterCategory::WatchedStatus => from_pairs(WATCHED_STATUSES),
        FilterCategory::Availability => from_pairs(AVAILABILITIES),
        FilterCategory::ReleaseYear => (OLDEST_RELEASE_YEAR..=NEWEST_RELEASE_YEAR)
            .rev()
            .map(|year| FilterOption {
                id: year.to_string(),
                name: year.to_string(),
            })
            .collect(),
        FilterCategory::Duration => from_pairs(DURATIONS),
        FilterCategory::Language => from_pairs(LANGUAGES),
        FilterCategory::Rating => from_pairs(RATINGS),
    }
}

fn from_pairs(pairs: &[(&str, &str)]) -> Vec<FilterOption> {
    pairs
        .iter()
        .map(|(id, name)| FilterOption {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
}
