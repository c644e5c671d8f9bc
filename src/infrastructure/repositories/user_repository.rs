use crate::infrastructure::db::DbPool;
use crate::{
    domain::user::{User, UserRole},
    error::AppResult,
};
use std::sync::Arc;
use uuid::Uuid;

pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Find user by ID
    pub async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Create a new user with an already-hashed password
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        hashed_password: &str,
        role: UserRole,
    ) -> AppResult<User> {
        let pool = self.pool.as_ref();
        let id = Uuid::new_v4();
        let now = chrono::Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, hashed_password, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(email)
        .bind(hashed_password)
        .bind(role)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Partially update a user; NULL arguments leave the column unchanged.
    /// Returns None when no row matches.
    pub async fn update_partial(
        &self,
        user_id: Uuid,
        username: Option<&str>,
        email: Option<&str>,
        role: Option<UserRole>,
    ) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = COALESCE($1, username),
                email = COALESCE($2, email),
                role = COALESCE($3, role),
                updated_at = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(role)
        .bind(now)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }
}
