use anyhow::Context;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::schema::{JoinWaitlistRequestBody, JoinWaitlistResponseBody};
use crate::{
    app::{
        error::{AppError, AppResult},
        AppState,
    },
    domain::waitlist::{WaitlistEntry, WaitlistSubmission},
};

#[tracing::instrument(
    name = "Join the waitlist",
    skip(state, payload),
    fields(email = tracing::field::Empty)
)]
pub async fn join_waitlist(
    State(state): State<AppState>,
    payload: Result<Json<JoinWaitlistRequestBody>, JsonRejection>,
) -> AppResult<(StatusCode, Json<JoinWaitlistResponseBody>)> {
    let Json(body) = payload?;
    let submission = WaitlistSubmission::try_from(body).map_err(AppError::Validation)?;
    tracing::Span::current().record("email", &tracing::field::display(&submission.email));

    let entry = upsert_entry(&state.db, &submission)
        .await
        .context("Failed to store the waitlist entry.")?;

    Ok((
        StatusCode::CREATED,
        Json(JoinWaitlistResponseBody {
            success: true,
            entry,
        }),
    ))
}

/// Inserts the submission, or merges it into the row already stored for the
/// same email. `NULL` update parameters keep the stored value.
#[tracing::instrument(
    name = "Upserting waitlist entry into the database",
    skip(db, submission),
    fields(email = %submission.email)
)]
async fn upsert_entry(
    db: &PgPool,
    submission: &WaitlistSubmission,
) -> Result<WaitlistEntry, sqlx::Error> {
    sqlx::query_as::<_, WaitlistEntry>(
        r#"
        INSERT INTO waitlist_entries (id, email, feedback, pain_points, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $5)
        ON CONFLICT (email) DO UPDATE SET
            feedback = COALESCE($6, waitlist_entries.feedback),
            pain_points = COALESCE($7, waitlist_entries.pain_points),
            updated_at = $5
        RETURNING id, email, feedback, pain_points, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(submission.email.as_ref())
    .bind(submission.feedback.as_deref())
    .bind(&submission.pain_points)
    .bind(Utc::now())
    .bind(submission.feedback_update())
    .bind(submission.pain_points_update())
    .fetch_one(db)
    .await
    .map_err(|e| {
        tracing::error!(detail = e.to_string(), "failed to upsert waitlist entry");
        e
    })
}
