use axum::{
    extract::{Path, State},
    routing::{get, patch},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::{SetAttendedRequest, SetUsedRequest, UserSummary};
use crate::{
    appointments::repo::{Appointment, AppointmentWithOwner},
    auth::{extractors::AdminUser, repo::User},
    error::ApiError,
    rewards::repo::{self as coupons, Coupon, CouponWithOwner},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/appointments", get(list_appointments))
        .route("/appointments/:id", patch(update_appointment))
        .route("/coupons", get(list_coupons))
        .route("/coupons/:id", patch(update_coupon))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = User::list_non_admin(&state.db).await?;
    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}

#[instrument(skip(state))]
pub async fn list_appointments(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> Result<Json<Vec<AppointmentWithOwner>>, ApiError> {
    let rows = Appointment::list_with_owner(&state.db).await?;
    Ok(Json(rows))
}

#[instrument(skip(state, payload))]
pub async fn update_appointment(
    State(state): State<AppState>,
    AdminUser(admin_id): AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetAttendedRequest>,
) -> Result<Json<Appointment>, ApiError> {
    let appointment = Appointment::set_attended(&state.db, id, payload.attended)
        .await?
        .ok_or_else(|| ApiError::NotFound("Appointment not found".into()))?;

    info!(admin_id = %admin_id, appointment_id = %id, attended = payload.attended, "appointment updated");
    Ok(Json(appointment))
}

#[instrument(skip(state))]
pub async fn list_coupons(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> Result<Json<Vec<CouponWithOwner>>, ApiError> {
    let rows = coupons::list_with_owner(&state.db).await?;
    Ok(Json(rows))
}

#[instrument(skip(state, payload))]
pub async fn update_coupon(
    State(state): State<AppState>,
    AdminUser(admin_id): AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetUsedRequest>,
) -> Result<Json<Coupon>, ApiError> {
    let coupon = coupons::set_used(&state.db, id, payload.used)
        .await?
        .ok_or_else(|| ApiError::NotFound("Coupon not found".into()))?;

    info!(admin_id = %admin_id, coupon_id = %id, used = payload.used, "coupon updated");
    Ok(Json(coupon))
}
