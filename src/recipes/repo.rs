use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Recipe record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub ingredients: String,
    pub time_minutes: i64,
}

impl Recipe {
    pub async fn create(
        db: &SqlitePool,
        title: &str,
        ingredients: &str,
        time_minutes: i64,
    ) -> anyhow::Result<Recipe> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            INSERT INTO recipes (title, ingredients, time_minutes)
            VALUES (?1, ?2, ?3)
            RETURNING id, title, ingredients, time_minutes
            "#,
        )
        .bind(title)
        .bind(ingredients)
        .bind(time_minutes)
        .fetch_one(db)
        .await?;
        Ok(recipe)
    }

    /// List recipes, optionally narrowed to those whose ingredients contain
    /// `ingredient` (case-insensitive substring) and whose time is at most
    /// `max_time`.
    pub async fn list(
        db: &SqlitePool,
        ingredient: Option<&str>,
        max_time: Option<i64>,
    ) -> anyhow::Result<Vec<Recipe>> {
        let rows = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, title, ingredients, time_minutes
            FROM recipes
            WHERE (?1 IS NULL OR ingredients LIKE '%' || ?1 || '%')
              AND (?2 IS NULL OR time_minutes <= ?2)
            ORDER BY id
            "#,
        )
        .bind(ingredient)
        .bind(max_time)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Apply a partial update; absent fields keep their stored value.
    /// Returns false when no recipe has this id.
    pub async fn update(
        db: &SqlitePool,
        id: i64,
        title: Option<&str>,
        ingredients: Option<&str>,
        time_minutes: Option<i64>,
    ) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE recipes
            SET title        = COALESCE(?1, title),
                ingredients  = COALESCE(?2, ingredients),
                time_minutes = COALESCE(?3, time_minutes)
            WHERE id = ?4
            "#,
        )
        .bind(title)
        .bind(ingredients)
        .bind(time_minutes)
        .bind(id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns false when no recipe has this id.
    pub async fn delete(db: &SqlitePool, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[tokio::test]
    async fn update_keeps_omitted_fields() {
        let state = AppState::fake().await;
        let recipe = Recipe::create(&state.db, "Bolo", "farinha, ovos", 40)
            .await
            .expect("insert");

        let updated = Recipe::update(&state.db, recipe.id, None, None, Some(20))
            .await
            .expect("update");
        assert!(updated);

        let rows = Recipe::list(&state.db, None, None).await.expect("list");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Bolo");
        assert_eq!(rows[0].ingredients, "farinha, ovos");
        assert_eq!(rows[0].time_minutes, 20);
    }

    #[tokio::test]
    async fn list_filter_is_case_insensitive() {
        let state = AppState::fake().await;
        Recipe::create(&state.db, "Pão caseiro", "Farinha de trigo, água, sal", 90)
            .await
            .expect("insert");

        let hits = Recipe::list(&state.db, Some("farinha"), None)
            .await
            .expect("list");
        assert_eq!(hits.len(), 1);

        let hits = Recipe::list(&state.db, Some("FARINHA"), None)
            .await
            .expect("list");
        assert_eq!(hits.len(), 1);

        let hits = Recipe::list(&state.db, Some("chocolate"), None)
            .await
            .expect("list");
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let state = AppState::fake().await;
        assert!(!Recipe::update(&state.db, 4242, Some("x"), None, None)
            .await
            .expect("update"));
        assert!(!Recipe::delete(&state.db, 4242).await.expect("delete"));
    }
}
