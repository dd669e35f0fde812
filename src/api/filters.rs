// Filter panel API - catalog, selection state, and filter mutations

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::discover::catalog::{self, FilterCategory, FilterOption};
use crate::discover::selection::{FilterAction, Selection};
use crate::AppState;

use super::results::refresh_results;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_catalog))
        .route("/Selection", get(get_selection))
        .route("/Select", post(select_filter))
        .route("/Clear", post(clear_filter))
        .route("/ClearAll", post(clear_all_filters))
}

#[derive(Debug, Serialize)]
pub struct CatalogCategory {
    pub category: FilterCategory,
    pub options: Vec<FilterOption>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectRequest {
    pub category: FilterCategory,
    pub option: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearRequest {
    pub category: FilterCategory,
}

/// GET /Filters
/// Filter categories and their option sets for the current content type.
/// The genre table follows the selected content type; the rating category
/// is not offered at all while browsing tv.
async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<Vec<CatalogCategory>> {
    let content_type = {
        let selection = state.selection.read().await;
        selection
            .get(FilterCategory::ContentType)
            .map(str::to_string)
    };

    let categories = FilterCategory::ALL
        .into_iter()
        .filter(|category| {
            !(content_type.as_deref() == Some("tv") && *category == FilterCategory::Rating)
        })
        .map(|category| CatalogCategory {
            category,
            options: catalog::options(category, content_type.as_deref()),
        })
        .collect();

    Json(categories)
}

/// GET /Filters/Selection
async fn get_selection(State(state): State<Arc<AppState>>) -> Json<Selection> {
    Json(state.selection.read().await.clone())
}

/// POST /Filters/Select
/// Applies one filter choice and refreshes the result feed. Option ids are
/// accepted as-is; an id the catalog does not know just yields an empty
/// feed upstream.
async fn select_filter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectRequest>,
) -> Json<Selection> {
    tracing::debug!("Select {} = {}", req.category.label(), req.option);

    let updated = {
        let mut selection = state.selection.write().await;
        selection.apply(FilterAction::Select {
            category: req.category,
            option: req.option,
        });
        selection.clone()
    };

    refresh_results(&state).await;
    Json(updated)
}

/// POST /Filters/Clear
async fn clear_filter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClearRequest>,
) -> Json<Selection> {
    tracing::debug!("Clear {}", req.category.label());

    let updated = {
        let mut selection = state.selection.write().await;
        selection.apply(FilterAction::Clear {
            category: req.category,
        });
        selection.clone()
    };

    refresh_results(&state).await;
    Json(updated)
}

/// POST /Filters/ClearAll
async fn clear_all_filters(State(state): State<Arc<AppState>>) -> Json<Selection> {
    tracing::debug!("Clear all filters");

    let updated = {
        let mut selection = state.selection.write().await;
        selection.apply(FilterAction::ClearAll);
        selection.clone()
    };

    refresh_results(&state).await;
    Json(updated)
}
