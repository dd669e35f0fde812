// Quiz API - drives the guided three-question flow

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::discover::quiz::{Quiz, QuizAnswer, QuizAnswers, QuizStep};
use crate::discover::selection::{FilterAction, Selection};
use crate::AppState;

use super::results::refresh_results;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_quiz))
        .route("/Start", post(start_quiz))
        .route("/Answer", post(answer_quiz))
        .route("/Next", post(next_question))
        .route("/Back", post(back_question))
        .route("/Apply", post(apply_quiz))
        .route("/Cancel", post(cancel_quiz))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStatus {
    pub active: bool,
    pub step: Option<QuizStep>,
    pub answers: Option<QuizAnswers>,
    pub can_apply: bool,
}

impl QuizStatus {
    fn of(quiz: Option<&Quiz>) -> Self {
        match quiz {
            Some(quiz) => Self {
                active: true,
                step: Some(quiz.step()),
                answers: Some(*quiz.answers()),
                can_apply: quiz.can_apply(),
            },
            None => Self {
                active: false,
                step: None,
                answers: None,
                can_apply: false,
            },
        }
    }
}

fn no_quiz() -> (StatusCode, String) {
    (StatusCode::CONFLICT, "No quiz in progress".to_string())
}

/// GET /Quiz
async fn get_quiz(State(state): State<Arc<AppState>>) -> Json<QuizStatus> {
    let quiz = state.quiz.read().await;
    Json(QuizStatus::of(quiz.as_ref()))
}

/// POST /Quiz/Start
/// Begins a fresh quiz, replacing any in-progress one. The filter selection
/// is left as-is until the quiz is applied.
async fn start_quiz(State(state): State<Arc<AppState>>) -> Json<QuizStatus> {
    let mut quiz = state.quiz.write().await;
    *quiz = Some(Quiz::new());
    Json(QuizStatus::of(quiz.as_ref()))
}

/// POST /Quiz/Answer
/// Records an answer; re-answering after going back overwrites the
/// previous choice.
async fn answer_quiz(
    State(state): State<Arc<AppState>>,
    Json(answer): Json<QuizAnswer>,
) -> Result<Json<QuizStatus>, (StatusCode, String)> {
    let mut quiz = state.quiz.write().await;
    let current = quiz.as_mut().ok_or_else(no_quiz)?;
    current.record(answer);
    Ok(Json(QuizStatus::of(quiz.as_ref())))
}

/// POST /Quiz/Next
/// Advances to the next question; rejected while the current one is
/// unanswered.
async fn next_question(
    State(state): State<Arc<AppState>>,
) -> Result<Json<QuizStatus>, (StatusCode, String)> {
    let mut quiz = state.quiz.write().await;
    let current = quiz.as_mut().ok_or_else(no_quiz)?;
    current
        .next()
        .map_err(|e| (StatusCode::CONFLICT, e.to_string()))?;
    Ok(Json(QuizStatus::of(quiz.as_ref())))
}

/// POST /Quiz/Back
async fn back_question(
    State(state): State<Arc<AppState>>,
) -> Result<Json<QuizStatus>, (StatusCode, String)> {
    let mut quiz = state.quiz.write().await;
    let current = quiz.as_mut().ok_or_else(no_quiz)?;
    current.back();
    Ok(Json(QuizStatus::of(quiz.as_ref())))
}

/// POST /Quiz/Apply
/// Resolves the completed quiz into a selection that replaces the panel
/// state wholesale, then refreshes the result feed.
async fn apply_quiz(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Selection>, (StatusCode, String)> {
    let resolved = {
        let mut quiz = state.quiz.write().await;
        let current = quiz.as_ref().ok_or_else(no_quiz)?;
        let resolved = current
            .apply()
            .map_err(|e| (StatusCode::CONFLICT, e.to_string()))?;
        *quiz = None;
        resolved
    };

    let updated = {
        let mut selection = state.selection.write().await;
        selection.apply(FilterAction::ReplaceAll(resolved));
        selection.clone()
    };

    refresh_results(&state).await;
    Ok(Json(updated))
}

/// POST /Quiz/Cancel
/// Discards the quiz and its answers; the filter selection is untouched.
async fn cancel_quiz(State(state): State<Arc<AppState>>) -> Json<QuizStatus> {
    let mut quiz = state.quiz.write().await;
    *quiz = None;
    Json(QuizStatus::of(quiz.as_ref()))
}
