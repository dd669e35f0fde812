// Results feed API - the poster grid for the active selection

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::discover::query;
use crate::services::tmdb::PosterCard;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_results))
}

/// GET /Results
/// Returns the most recently fetched poster list without refetching.
async fn get_results(State(state): State<Arc<AppState>>) -> Json<Vec<PosterCard>> {
    let posters = state.posters.read().await.clone();
    Json(posters)
}

/// Re-derive the discover query for the current selection and replace the
/// poster list with the fetched page.
///
/// Failures are logged and leave the previous list in place; there is no
/// retry and callers never see an error. Overlapping refreshes settle
/// last-resolved-wins. The selection lock is not held across the fetch.
pub async fn refresh_results(state: &AppState) {
    let derived = {
        let selection = state.selection.read().await;
        query::derive(&selection)
    };

    match state.tmdb.discover(&derived).await {
        Ok(posters) => {
            tracing::debug!(
                "Discover returned {} posters for {}",
                posters.len(),
                derived.path()
            );
            *state.posters.write().await = posters;
        }
        Err(e) => {
            tracing::error!("Discover fetch failed for {}: {}", derived.path(), e);
        }
    }
}
