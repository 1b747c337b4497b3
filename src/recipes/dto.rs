use serde::{Deserialize, Serialize};

use crate::recipes::repo::Recipe;

/// Request body for creating a recipe. All three fields are required;
/// presence is checked in the handler.
#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub time_minutes: Option<i64>,
}

/// Request body for partial updates. Omitted fields keep their value.
#[derive(Debug, Deserialize)]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub time_minutes: Option<i64>,
}

/// Query filters for listing recipes. Independently optional, combined
/// with AND.
#[derive(Debug, Deserialize)]
pub struct RecipeFilter {
    pub ingredient: Option<String>,
    pub max_time: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: i64,
    pub title: String,
    pub ingredients: String,
    pub time_minutes: i64,
}

impl From<Recipe> for RecipeResponse {
    fn from(r: Recipe) -> Self {
        Self {
            id: r.id,
            title: r.title,
            ingredients: r.ingredients,
            time_minutes: r.time_minutes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedRecipeResponse {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
