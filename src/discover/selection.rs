// Filter selection state and its transition rules

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::FilterCategory;

/// Sparse filter selection: category -> chosen option id.
///
/// Ids are stored verbatim and never checked against the catalog; an unknown
/// id simply matches nothing downstream. An absent or empty value both read
/// as unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection(BTreeMap<FilterCategory, String>);

impl Default for Selection {
    /// A fresh panel starts out browsing movies.
    fn default() -> Self {
        Selection::empty().with(FilterCategory::ContentType, "movie")
    }
}

impl Selection {
    pub fn empty() -> Self {
        Selection(BTreeMap::new())
    }

    /// Builder-style insert, used when assembling a selection patch.
    pub fn with(mut self, category: FilterCategory, option: impl Into<String>) -> Self {
        self.0.insert(category, option.into());
        self
    }

    pub fn get(&self, category: FilterCategory) -> Option<&str> {
        self.0
            .get(&category)
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }

    /// Apply one transition. All invalidation rules live here: choosing a
    /// content type clears the genre and rating choices in the same step,
    /// since both depend on it.
    pub fn apply(&mut self, action: FilterAction) {
        match action {
            FilterAction::Select { category, option } => {
                self.0.insert(category, option);
                if category == FilterCategory::ContentType {
                    self.0.remove(&FilterCategory::Genre);
                    self.0.remove(&FilterCategory::Rating);
                }
            }
            FilterAction::Clear { category } => {
                self.0.remove(&category);
            }
            FilterAction::ClearAll => {
                self.0.clear();
            }
            FilterAction::ReplaceAll(new) => {
                *self = new;
            }
        }
    }
}

/// State transitions for the filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Set one category to an option id. Any string is accepted.
    Select {
        category: FilterCategory,
        option: String,
    },
    /// Unset one category.
    Clear { category: FilterCategory },
    /// Unset every category, genre included.
    ClearAll,
    /// Wholesale overwrite; categories absent from the new selection
    /// become unset. This is the quiz apply path.
    ReplaceAll(Selection),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_movie() {
        let selection = Selection::default();
        assert_eq!(selection.get(FilterCategory::ContentType), Some("movie"));
        assert_eq!(selection.get(FilterCategory::Genre), None);
    }

    #[test]
    fn test_content_type_change_clears_genre_and_rating() {
        let mut selection = Selection::default();
        selection.apply(FilterAction::Select {
            category: FilterCategory::Genre,
            option: "53".to_string(),
        });
        selection.apply(FilterAction::Select {
            category: FilterCategory::Rating,
            option: "PG-13".to_string(),
        });
        selection.apply(FilterAction::Select {
            category: FilterCategory::Language,
            option: "ko".to_string(),
        });

        selection.apply(FilterAction::Select {
            category: FilterCategory::ContentType,
            option: "tv".to_string(),
        });

        assert_eq!(selection.get(FilterCategory::ContentType), Some("tv"));
        assert_eq!(selection.get(FilterCategory::Genre), None);
        assert_eq!(selection.get(FilterCategory::Rating), None);
        // Unrelated filters survive the switch
        assert_eq!(selection.get(FilterCategory::Language), Some("ko"));
    }

    #[test]
    fn test_clear_unsets_single_category() {
        let mut selection = Selection::default().with(FilterCategory::Language, "en");
        selection.apply(FilterAction::Clear {
            category: FilterCategory::Language,
        });
        assert_eq!(selection.get(FilterCategory::Language), None);
        assert_eq!(selection.get(FilterCategory::ContentType), Some("movie"));
    }

    #[test]
    fn test_clear_all_unsets_everything() {
        let mut selection = Selection::default()
            .with(FilterCategory::Genre, "28")
            .with(FilterCategory::ReleaseYear, "2001");
        selection.apply(FilterAction::ClearAll);
        assert_eq!(selection, Selection::empty());
    }

    #[test]
    fn test_replace_all_drops_absent_categories() {
        let mut selection = Selection::default()
            .with(FilterCategory::Language, "es")
            .with(FilterCategory::ReleaseYear, "1994");

        let patch = Selection::empty()
            .with(FilterCategory::ContentType, "tv")
            .with(FilterCategory::Genre, "80")
            .with(FilterCategory::Duration, "2");
        selection.apply(FilterAction::ReplaceAll(patch.clone()));

        assert_eq!(selection, patch);
        assert_eq!(selection.get(FilterCategory::Language), None);
        assert_eq!(selection.get(FilterCategory::ReleaseYear), None);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut once = Selection::default();
        once.apply(FilterAction::Select {
            category: FilterCategory::Language,
            option: "en".to_string(),
        });

        let mut twice = once.clone();
        twice.apply(FilterAction::Select {
            category: FilterCategory::Language,
            option: "en".to_string(),
        });

        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_ids_are_stored_verbatim() {
        let mut selection = Selection::default();
        selection.apply(FilterAction::Select {
            category: FilterCategory::Genre,
            option: "999999".to_string(),
        });
        assert_eq!(selection.get(FilterCategory::Genre), Some("999999"));
    }

    #[test]
    fn test_empty_value_reads_as_unset() {
        let selection = Selection::default().with(FilterCategory::Genre, "");
        assert_eq!(selection.get(FilterCategory::Genre), None);
    }
}
