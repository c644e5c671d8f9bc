use std::sync::Arc;

use uuid::Uuid;

use super::dto::*;
use super::error::UserServiceError;
use super::model::UserProfile;
use crate::error::AppError;
use crate::infrastructure::auth::{hash_password, session_token_for, verify_password};
use crate::infrastructure::repositories::UserRepository;

pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Register a new user with a bcrypt-hashed password
    pub async fn register(
        &self,
        request: RegisterUserRequest,
    ) -> Result<UserRegistrationResponse, UserServiceError> {
        let hashed_password = hash_password(&request.password)?;

        let user = self
            .user_repo
            .create(
                &request.username,
                &request.email,
                &hashed_password,
                request.role,
            )
            .await
            .map_err(map_unique_violation)?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(UserRegistrationResponse {
            user_id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            message: format!("User {} successfully created.", user.username),
        })
    }

    /// Authenticate a user by email and password.
    ///
    /// An unknown email is an error (404); a wrong password is an ordinary
    /// `success=false` response, mirroring the API contract.
    pub async fn login(
        &self,
        request: LoginUserRequest,
    ) -> Result<UserLoginResponse, UserServiceError> {
        let user = self
            .user_repo
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                UserServiceError::NotFound("User with this email does not exist.".to_string())
            })?;

        if !verify_password(&request.password, &user.hashed_password)? {
            tracing::info!(user_id = %user.id, "Login rejected: incorrect password");
            return Ok(UserLoginResponse {
                success: false,
                message: "Incorrect password.".to_string(),
                session_token: None,
            });
        }

        tracing::info!(user_id = %user.id, "Login successful");

        Ok(UserLoginResponse {
            success: true,
            message: "Login successful.".to_string(),
            session_token: Some(session_token_for(user.id)),
        })
    }

    /// Apply a partial profile update; only provided fields change
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<UserProfileUpdateResponse, UserServiceError> {
        let UpdateUserRequest {
            username,
            email,
            role,
        } = request;

        let updated = self
            .user_repo
            .update_partial(user_id, username.as_deref(), email.as_deref(), role)
            .await
            .map_err(map_unique_violation)?
            .ok_or_else(|| UserServiceError::NotFound("User not found.".to_string()))?;

        tracing::info!(user_id = %updated.id, "User profile updated");

        Ok(UserProfileUpdateResponse {
            success: true,
            updated_user: UserProfile::from(&updated),
        })
    }
}

// Postgres unique_violation, surfaced as a 409 instead of a generic 500
fn map_unique_violation(err: AppError) -> UserServiceError {
    if let AppError::Database(sqlx::Error::Database(ref db_err)) = err {
        if db_err.code().as_deref() == Some("23505") {
            return UserServiceError::Conflict("Username or email already in use.".to_string());
        }
    }
    UserServiceError::from(err)
}
