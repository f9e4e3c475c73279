use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{CreatePetRequest, PetResponse},
    repo::Pet,
};
use crate::{auth::extractors::AuthUser, error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/pets", get(list_pets).post(create_pet))
}

#[instrument(skip(state))]
pub async fn list_pets(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<PetResponse>>, ApiError> {
    let pets = Pet::list_by_user(&state.db, user_id).await?;
    Ok(Json(pets.into_iter().map(PetResponse::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_pet(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreatePetRequest>,
) -> Result<(StatusCode, Json<PetResponse>), ApiError> {
    if payload.name.trim().is_empty() || payload.species.trim().is_empty() {
        return Err(ApiError::BadRequest("Name and type are required".into()));
    }

    let pet = Pet::create(&state.db, user_id, payload.name.trim(), payload.species.trim()).await?;
    info!(user_id = %user_id, pet_id = %pet.id, "pet added");
    Ok((StatusCode::CREATED, Json(PetResponse::from(pet))))
}
