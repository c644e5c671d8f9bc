use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{UserProfile, UserRole};

/// Request for POST /user/register
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Confirms account creation without exposing sensitive fields
#[derive(Debug, Serialize, Deserialize)]
pub struct UserRegistrationResponse {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub message: String,
}

/// Request for POST /user/login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginUserRequest {
    pub email: String,
    pub password: String,
}

/// Feedback on a login attempt, with session information on success
#[derive(Debug, Serialize, Deserialize)]
pub struct UserLoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

/// Request for PATCH /user/:user_id - only provided fields are changed
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

/// Confirms a profile update and returns the updated profile
#[derive(Debug, Serialize, Deserialize)]
pub struct UserProfileUpdateResponse {
    pub success: bool,
    pub updated_user: UserProfile,
}
