use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::services::AuthUser,
    error::{ApiError, ApiJson},
    state::AppState,
};

use super::dto::{
    CreateRecipeRequest, CreatedRecipeResponse, MessageResponse, RecipeFilter, RecipeResponse,
    UpdateRecipeRequest,
};
use super::repo::Recipe;

pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", post(create_recipe).get(list_recipes))
        .route("/recipes/:id", put(update_recipe).delete(delete_recipe))
}

#[instrument(skip(state, payload))]
pub async fn create_recipe(
    State(state): State<AppState>,
    AuthUser(username): AuthUser,
    ApiJson(payload): ApiJson<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<CreatedRecipeResponse>), ApiError> {
    let title = payload
        .title
        .ok_or_else(|| ApiError::BadRequest("title is required".into()))?;
    let ingredients = payload
        .ingredients
        .ok_or_else(|| ApiError::BadRequest("ingredients is required".into()))?;
    let time_minutes = payload
        .time_minutes
        .ok_or_else(|| ApiError::BadRequest("time_minutes is required".into()))?;

    let recipe = Recipe::create(&state.db, &title, &ingredients, time_minutes).await?;

    info!(recipe_id = recipe.id, username = %username, "recipe created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedRecipeResponse {
            id: recipe.id,
            message: "Recipe created".into(),
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
    AuthUser(username): AuthUser,
    Query(filter): Query<RecipeFilter>,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    let recipes = Recipe::list(&state.db, filter.ingredient.as_deref(), filter.max_time).await?;
    Ok(Json(recipes.into_iter().map(RecipeResponse::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn update_recipe(
    State(state): State<AppState>,
    AuthUser(username): AuthUser,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<UpdateRecipeRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let updated = Recipe::update(
        &state.db,
        id,
        payload.title.as_deref(),
        payload.ingredients.as_deref(),
        payload.time_minutes,
    )
    .await?;

    if !updated {
        warn!(recipe_id = id, username = %username, "update of missing recipe");
        return Err(ApiError::NotFound("Recipe not found".into()));
    }

    info!(recipe_id = id, username = %username, "recipe updated");
    Ok(Json(MessageResponse {
        message: "Recipe updated".into(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_recipe(
    State(state): State<AppState>,
    AuthUser(username): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = Recipe::delete(&state.db, id).await?;

    if !deleted {
        warn!(recipe_id = id, username = %username, "delete of missing recipe");
        return Err(ApiError::NotFound("Recipe not found".into()));
    }

    info!(recipe_id = id, username = %username, "recipe deleted");
    Ok(Json(MessageResponse {
        message: "Recipe deleted".into(),
    }))
}
