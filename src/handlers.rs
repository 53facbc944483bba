// src/handlers.rs
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use chrono::Utc;
use serde::Serialize;
use http::{header, StatusCode};
use tera::Context;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::{Question, VoteForm};
use crate::poll::{self, VoteOutcome};
use crate::routes;
use crate::state::AppState;
use crate::templates;

pub const NO_CHOICE_MESSAGE: &str = "You did not select an option.";

#[derive(Serialize)]
struct QuestionLink<'a> {
    question: &'a Question,
    url: String,
}

/// Bare site root goes to the poll index
pub async fn root() -> Redirect {
    Redirect::permanent(routes::INDEX_PATH)
}

/// Up to five published questions, newest first
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let questions = poll::latest_published(&state.pool, Utc::now(), poll::LATEST_LIMIT).await?;

    let links: Vec<QuestionLink<'_>> = questions
        .iter()
        .map(|question| QuestionLink {
            question,
            url: routes::detail_path(question.id),
        })
        .collect();

    let mut context = Context::new();
    context.insert("latest_question_list", &links);
    Ok(Html(state.templates.render(templates::INDEX, &context)?))
}

/// Question with its choices. Future-dated questions answer 404 as if missing.
pub async fn detail(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let question = poll::published_question(&state.pool, question_id, Utc::now())
        .await?
        .ok_or(AppError::NotFound)?;

    debug!(question_id, "Rendering question detail");
    render_detail(&state, &question, None).await
}

pub async fn results(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let question = poll::question(&state.pool, question_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let choices = poll::choices_for(&state.pool, question.id).await?;

    let mut context = Context::new();
    context.insert("question", &question);
    context.insert("choices", &choices);
    context.insert("detail_url", &routes::detail_path(question.id));
    Ok(Html(state.templates.render(templates::RESULTS, &context)?))
}

/// Record a vote and redirect to the results page.
///
/// A missing or foreign choice re-renders the form with an error and leaves
/// every tally untouched. A body that is not a urlencoded form counts as
/// no selection.
pub async fn vote(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    form: Result<Form<VoteForm>, FormRejection>,
) -> Result<Response, AppError> {
    let question = poll::question(&state.pool, question_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!(question_id, %rejection, "Vote body is not a urlencoded form");
            VoteForm::default()
        }
    };

    let outcome = match form.choice_id() {
        Some(choice_id) => poll::record_vote(&state.pool, question.id, choice_id).await?,
        None => VoteOutcome::UnknownChoice,
    };

    match outcome {
        VoteOutcome::Recorded => {
            info!(question_id, choice = ?form.choice, "Vote recorded");
            let location = routes::results_path(question.id);
            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        VoteOutcome::UnknownChoice => {
            warn!(question_id, choice = ?form.choice, "Rejected vote without a valid choice");
            Ok(render_detail(&state, &question, Some(NO_CHOICE_MESSAGE))
                .await?
                .into_response())
        }
    }
}

async fn render_detail(
    state: &AppState,
    question: &Question,
    error_message: Option<&str>,
) -> Result<Html<String>, AppError> {
    let choices = poll::choices_for(&state.pool, question.id).await?;

    let mut context = Context::new();
    context.insert("question", question);
    context.insert("choices", &choices);
    context.insert("error_message", &error_message);
    context.insert("vote_url", &routes::vote_path(question.id));
    Ok(Html(state.templates.render(templates::DETAIL, &context)?))
}
