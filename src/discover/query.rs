// Discover query derivation - maps the filter selection onto TMDB
// discover parameters

use std::sync::LazyLock;

use regex::Regex;

use super::catalog::FilterCategory;
use super::selection::Selection;

static RE_FIRST_AIR_DATE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&first_air_date_year=[^&]*").unwrap());
static RE_PRIMARY_RELEASE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&primary_release_year=[^&]*").unwrap());

const BASE_PARAMS: &str =
    "include_adult=false&include_video=false&language=en-US&sort_by=popularity.desc";

/// A derived discover request: resource segment plus its query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverQuery {
    pub resource: &'static str,
    pub params: String,
}

impl DiscoverQuery {
    /// Path relative to the discover endpoint, e.g.
    /// `movie?include_adult=false&...`.
    pub fn path(&self) -> String {
        format!("{}?{}", self.resource, self.params)
    }
}

/// Derive the discover query for a selection.
///
/// Total and deterministic: ids are appended verbatim (catalog ids are
/// URL-safe) and unknown values fall through to TMDB as no-matches. Anything
/// other than an explicit `tv` content type is treated as movie.
pub fn derive(selection: &Selection) -> DiscoverQuery {
    let tv = selection.get(FilterCategory::ContentType) == Some("tv");
    let resource = if tv { "tv" } else { "movie" };

    let mut params = String::from(BASE_PARAMS);

    if let Some(genre) = selection.get(FilterCategory::Genre) {
        params.push_str(&format!("&with_genres={}", genre));
    }

    // Watched status maps to a fixed-year filter. The watched arm matches
    // the option label (which the catalog id "2000" never produces), the
    // unwatched arm the id "1999"; the movie parameter name also differs
    // between the two arms.
    match selection.get(FilterCategory::WatchedStatus) {
        Some("Watched") => {
            if tv {
                params.push_str("&first_air_date_year=1960");
            } else {
                params.push_str("&year=1960");
            }
        }
        Some("1999") => {
            if tv {
                params.push_str("&first_air_date_year=1961");
            } else {
                params.push_str("&primary_release_year=1961");
            }
        }
        _ => {}
    }

    // Coming Soon is modeled as the second page of the same feed.
    if selection.get(FilterCategory::Availability) == Some("2") {
        params.push_str("&page=2");
    } else {
        params.push_str("&page=1");
    }

    if let Some(year) = selection.get(FilterCategory::ReleaseYear) {
        // An explicit release year replaces whatever year filter the
        // watched status appended above.
        params = RE_FIRST_AIR_DATE_YEAR.replace(&params, "").into_owned();
        params = RE_PRIMARY_RELEASE_YEAR.replace(&params, "").into_owned();

        if tv {
            params.push_str(&format!("&first_air_date_year={}", year));
        } else {
            params.push_str(&format!("&primary_release_year={}", year));
        }
    }

    match selection.get(FilterCategory::Duration) {
        Some("1") => params.push_str("&with_runtime.lte=30"),
        Some("2") => params.push_str("&with_runtime.gte=30&with_runtime.lte=60"),
        Some("3") => params.push_str("&with_runtime.gte=60&with_runtime.lte=120"),
        Some("4") => params.push_str("&with_runtime.gte=120"),
        _ => {}
    }

    if let Some(language) = selection.get(FilterCategory::Language) {
        params.push_str(&format!("&with_original_language={}", language));
    }

    // Certification only applies to the movie feed; a stray rating left in
    // the selection while browsing tv is ignored outright.
    if !tv {
        if let Some(rating) = selection.get(FilterCategory::Rating) {
            params.push_str(&format!(
                "&certification={}&certification_country=US",
                rating
            ));
        }
    }

    DiscoverQuery { resource, params }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_matches(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_default_selection_query() {
        let query = derive(&Selection::default());
        assert_eq!(query.resource, "movie");
        assert_eq!(query.params, format!("{}&page=1", BASE_PARAMS));
    }

    #[test]
    fn test_resource_defaults_to_movie() {
        assert_eq!(derive(&Selection::empty()).resource, "movie");

        let odd = Selection::empty().with(FilterCategory::ContentType, "podcast");
        assert_eq!(derive(&odd).resource, "movie");

        let tv = Selection::empty().with(FilterCategory::ContentType, "tv");
        assert_eq!(derive(&tv).resource, "tv");
    }

    #[test]
    fn test_clear_all_matches_fresh_selection() {
        let mut cleared = Selection::default()
            .with(FilterCategory::Genre, "28")
            .with(FilterCategory::Language, "es");
        cleared.apply(crate::discover::selection::FilterAction::ClearAll);

        assert_eq!(derive(&cleared), derive(&Selection::default()));
    }

    #[test]
    fn test_genre_appended_verbatim() {
        let selection = Selection::default().with(FilterCategory::Genre, "999999");
        let query = derive(&selection);
        assert!(query.params.contains("&with_genres=999999"));
    }

    // The watched-status year filter keys off the option label for the
    // watched arm and the id for the unwatched arm, and uses `year` vs
    // `primary_release_year` on movies. Pinned here as a known quirk
    // pending product clarification.
    #[test]
    fn test_watched_catalog_id_produces_no_year_filter() {
        let selection = Selection::default().with(FilterCategory::WatchedStatus, "2000");
        let query = derive(&selection);
        assert!(!query.params.contains("year="));
    }

    #[test]
    fn test_watched_label_movie_uses_year_1960() {
        let selection = Selection::default().with(FilterCategory::WatchedStatus, "Watched");
        let query = derive(&selection);
        assert!(query.params.contains("&year=1960"));
        assert!(!query.params.contains("primary_release_year"));
    }

    #[test]
    fn test_unwatched_movie_uses_primary_release_year_1961() {
        let selection = Selection::default().with(FilterCategory::WatchedStatus, "1999");
        let query = derive(&selection);
        assert!(query.params.contains("&primary_release_year=1961"));
        assert!(!query.params.contains("&year=1961"));
    }

    #[test]
    fn test_watched_on_tv_uses_first_air_date_year() {
        let watched = Selection::empty()
            .with(FilterCategory::ContentType, "tv")
            .with(FilterCategory::WatchedStatus, "Watched");
        assert!(derive(&watched).params.contains("&first_air_date_year=1960"));

        let unwatched = Selection::empty()
            .with(FilterCategory::ContentType, "tv")
            .with(FilterCategory::WatchedStatus, "1999");
        assert!(derive(&unwatched)
            .params
            .contains("&first_air_date_year=1961"));
    }

    #[test]
    fn test_availability_selects_page() {
        let coming_soon = Selection::default().with(FilterCategory::Availability, "2");
        assert!(derive(&coming_soon).params.contains("&page=2"));

        let available = Selection::default().with(FilterCategory::Availability, "1");
        let query = derive(&available);
        assert!(query.params.contains("&page=1"));
        assert!(!query.params.contains("&page=2"));
    }

    #[test]
    fn test_release_year_overrides_watched_year_on_movie() {
        let selection = Selection::default()
            .with(FilterCategory::WatchedStatus, "1999")
            .with(FilterCategory::ReleaseYear, "1994");
        let query = derive(&selection);

        assert_eq!(count_matches(&query.params, "primary_release_year="), 1);
        assert!(query.params.contains("&primary_release_year=1994"));
        assert!(!query.params.contains("1961"));
        assert!(!query.params.contains("first_air_date_year"));
    }

    #[test]
    fn test_release_year_overrides_watched_year_on_tv() {
        let selection = Selection::empty()
            .with(FilterCategory::ContentType, "tv")
            .with(FilterCategory::WatchedStatus, "1999")
            .with(FilterCategory::ReleaseYear, "2008");
        let query = derive(&selection);

        assert_eq!(count_matches(&query.params, "first_air_date_year="), 1);
        assert!(query.params.contains("&first_air_date_year=2008"));
        assert!(!query.params.contains("1961"));
    }

    #[test]
    fn test_release_year_alone() {
        let selection = Selection::default().with(FilterCategory::ReleaseYear, "1977");
        let query = derive(&selection);
        assert!(query.params.contains("&primary_release_year=1977"));
    }

    #[test]
    fn test_duration_bucket_bounds() {
        let bucket = |id: &str| {
            derive(&Selection::default().with(FilterCategory::Duration, id)).params
        };

        let one = bucket("1");
        assert!(one.contains("&with_runtime.lte=30"));
        assert!(!one.contains("with_runtime.gte"));

        let two = bucket("2");
        assert!(two.contains("&with_runtime.gte=30&with_runtime.lte=60"));

        let three = bucket("3");
        assert!(three.contains("&with_runtime.gte=60&with_runtime.lte=120"));

        let four = bucket("4");
        assert!(four.contains("&with_runtime.gte=120"));
        assert!(!four.contains("with_runtime.lte"));

        let unknown = bucket("5");
        assert!(!unknown.contains("with_runtime"));
    }

    #[test]
    fn test_language_appended_verbatim() {
        let selection = Selection::default().with(FilterCategory::Language, "ko");
        assert!(derive(&selection)
            .params
            .contains("&with_original_language=ko"));
    }

    #[test]
    fn test_certification_on_movie_includes_country() {
        let selection = Selection::default().with(FilterCategory::Rating, "PG-13");
        let query = derive(&selection);
        assert!(query
            .params
            .contains("&certification=PG-13&certification_country=US"));
    }

    #[test]
    fn test_certification_suppressed_for_tv() {
        // Even a stray rating value never reaches the tv feed
        let selection = Selection::empty()
            .with(FilterCategory::ContentType, "tv")
            .with(FilterCategory::Rating, "R");
        let query = derive(&selection);
        assert!(!query.params.contains("certification"));
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let selection = Selection::default()
            .with(FilterCategory::Genre, "35")
            .with(FilterCategory::WatchedStatus, "1999")
            .with(FilterCategory::Availability, "2")
            .with(FilterCategory::ReleaseYear, "2010")
            .with(FilterCategory::Duration, "3")
            .with(FilterCategory::Language, "en")
            .with(FilterCategory::Rating, "R");

        let query = derive(&selection);
        assert_eq!(query, derive(&selection));
        assert_eq!(
            query.path(),
            format!(
                "movie?{}&with_genres=35&page=2&primary_release_year=2010\
                 &with_runtime.gte=60&with_runtime.lte=120\
                 &with_original_language=en\
                 &certification=R&certification_country=US",
                BASE_PARAMS
            )
        );
    }
}
