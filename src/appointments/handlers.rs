use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{info, instrument};

use super::{
    dto::{ScheduleRequest, ScheduleResponse},
    repo::Appointment,
};
use crate::{auth::extractors::AuthUser, error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/appointments", post(schedule))
}

#[instrument(skip(state, payload))]
pub async fn schedule(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<ScheduleRequest>,
) -> Result<(StatusCode, Json<ScheduleResponse>), ApiError> {
    let appointment =
        Appointment::create_with_reward(&state.db, user_id, payload.date, payload.time).await?;

    info!(user_id = %user_id, appointment_id = %appointment.id, "appointment scheduled");
    Ok((
        StatusCode::CREATED,
        Json(ScheduleResponse {
            message: "Appointment scheduled successfully".into(),
        }),
    ))
}
