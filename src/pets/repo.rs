use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Pet record, owned by exactly one user.
#[derive(Debug, Clone, FromRow)]
pub struct Pet {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub species: String,
    pub created_at: OffsetDateTime,
}

impl Pet {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Pet>> {
        let pets = sqlx::query_as::<_, Pet>(
            r#"
            SELECT id, user_id, name, species, created_at
            FROM pets
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(pets)
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        name: &str,
        species: &str,
    ) -> anyhow::Result<Pet> {
        let pet = sqlx::query_as::<_, Pet>(
            r#"
            INSERT INTO pets (user_id, name, species)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, species, created_at
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(species)
        .fetch_one(db)
        .await?;
        Ok(pet)
    }
}
