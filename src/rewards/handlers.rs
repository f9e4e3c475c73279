use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{CreateCouponRequest, PointsResponse, RedeemRequest, RedeemResponse},
    repo,
    repo::Coupon,
};
use crate::{auth::extractors::AuthUser, error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/points", get(points))
        .route("/redeem", post(redeem))
        .route("/coupons", get(list_coupons).post(create_coupon))
}

#[instrument(skip(state))]
pub async fn points(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = repo::points_balance(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    Ok(Json(PointsResponse { points }))
}

#[instrument(skip(state, payload))]
pub async fn redeem(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<RedeemRequest>,
) -> Result<Json<RedeemResponse>, ApiError> {
    if payload.reward_cost <= 0 {
        return Err(ApiError::BadRequest("Invalid reward cost".into()));
    }

    if !repo::debit_points(&state.db, user_id, payload.reward_cost).await? {
        warn!(user_id = %user_id, cost = payload.reward_cost, "redeem refused, balance too low");
        return Err(ApiError::BadRequest("Not enough points".into()));
    }

    info!(user_id = %user_id, cost = payload.reward_cost, "reward redeemed");
    Ok(Json(RedeemResponse {
        message: "Reward redeemed successfully".into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn create_coupon(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateCouponRequest>,
) -> Result<(StatusCode, Json<Coupon>), ApiError> {
    if payload.reward_cost <= 0 {
        return Err(ApiError::BadRequest("Invalid reward cost".into()));
    }
    if payload.reward_name.trim().is_empty() {
        return Err(ApiError::BadRequest("Reward name is required".into()));
    }

    let coupon =
        repo::issue_coupon(&state.db, user_id, payload.reward_name.trim(), payload.reward_cost)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user_id, cost = payload.reward_cost, "coupon refused, balance too low");
                ApiError::BadRequest("Not enough points".into())
            })?;

    info!(user_id = %user_id, coupon_id = %coupon.id, "coupon issued");
    Ok((StatusCode::CREATED, Json(coupon)))
}

#[instrument(skip(state))]
pub async fn list_coupons(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Coupon>>, ApiError> {
    let coupons = repo::list_by_user(&state.db, user_id).await?;
    Ok(Json(coupons))
}
