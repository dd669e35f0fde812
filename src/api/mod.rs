use axum::Router;
use std::sync::Arc;

use crate::AppState;

mod filters;
mod quiz;
pub mod results;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/Filters", filters::routes())
        .nest("/Quiz", quiz::routes())
        .nest("/Results", results::routes())
}
