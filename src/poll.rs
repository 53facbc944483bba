// src/poll.rs
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::models::{Choice, Question};

/// How many questions the index page shows.
pub const LATEST_LIMIT: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Recorded,
    /// The choice does not exist or belongs to another question.
    UnknownChoice,
}

/// Newest published questions first, at most `limit` of them.
pub async fn latest_published(
    pool: &SqlitePool,
    now: DateTime<Utc>,
    limit: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question_text, pub_date
        FROM questions
        WHERE pub_date <= $1
        ORDER BY pub_date DESC, id DESC
        LIMIT $2
        "#,
    )
    .bind(now)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    debug!(count = questions.len(), "Loaded latest published questions");
    Ok(questions)
}

pub async fn question(pool: &SqlitePool, id: i64) -> Result<Option<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>("SELECT id, question_text, pub_date FROM questions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Like [`question`], but questions dated in the future are treated as missing.
pub async fn published_question(
    pool: &SqlitePool,
    id: i64,
    now: DateTime<Utc>,
) -> Result<Option<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question_text, pub_date FROM questions WHERE id = $1 AND pub_date <= $2",
    )
    .bind(id)
    .bind(now)
    .fetch_optional(pool)
    .await
}

pub async fn choices_for(pool: &SqlitePool, question_id: i64) -> Result<Vec<Choice>, sqlx::Error> {
    sqlx::query_as::<_, Choice>(
        r#"
        SELECT id, question_id, choice_text, votes
        FROM choices
        WHERE question_id = $1
        ORDER BY id
        "#,
    )
    .bind(question_id)
    .fetch_all(pool)
    .await
}

/// Add one vote to `choice_id`, provided it belongs to `question_id`.
///
/// The increment happens inside a single UPDATE so concurrent votes never
/// overwrite each other.
pub async fn record_vote(
    pool: &SqlitePool,
    question_id: i64,
    choice_id: i64,
) -> Result<VoteOutcome, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE choices
        SET votes = votes + 1
        WHERE id = $1 AND question_id = $2
        "#,
    )
    .bind(choice_id)
    .bind(question_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        Ok(VoteOutcome::UnknownChoice)
    } else {
        Ok(VoteOutcome::Recorded)
    }
}

pub async fn create_question(
    pool: &SqlitePool,
    question_text: &str,
    pub_date: DateTime<Utc>,
) -> Result<Question, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO questions (question_text, pub_date)
        VALUES ($1, $2)
        RETURNING id, question_text, pub_date
        "#,
    )
    .bind(question_text)
    .bind(pub_date)
    .fetch_one(pool)
    .await
}

pub async fn add_choice(
    pool: &SqlitePool,
    question_id: i64,
    choice_text: &str,
) -> Result<Choice, sqlx::Error> {
    sqlx::query_as::<_, Choice>(
        r#"
        INSERT INTO choices (question_id, choice_text, votes)
        VALUES ($1, $2, 0)
        RETURNING id, question_id, choice_text, votes
        "#,
    )
    .bind(question_id)
    .bind(choice_text)
    .fetch_one(pool)
    .await
}

/// Remove a question together with its choices. Returns false if it did not exist.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
