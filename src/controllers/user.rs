use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::user::{
        LoginUserRequest, RegisterUserRequest, UpdateUserRequest, UserLoginResponse,
        UserProfileUpdateResponse, UserRegistrationResponse, UserService,
    },
    error::{AppError, AppResult},
};

pub struct UserController {
    user_service: Arc<UserService>,
}

impl UserController {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }

    /// POST /user/register - Create a new account
    pub async fn register(
        State(controller): State<Arc<UserController>>,
        Json(request): Json<RegisterUserRequest>,
    ) -> AppResult<Json<UserRegistrationResponse>> {
        let response = controller
            .user_service
            .register(request)
            .await
            .map_err(AppError::from)?;
        Ok(Json(response))
    }

    /// POST /user/login - Authenticate by email and password
    pub async fn login(
        State(controller): State<Arc<UserController>>,
        Json(request): Json<LoginUserRequest>,
    ) -> AppResult<Json<UserLoginResponse>> {
        let response = controller
            .user_service
            .login(request)
            .await
            .map_err(AppError::from)?;
        Ok(Json(response))
    }

    /// PATCH /user/:user_id - Update profile fields
    pub async fn update(
        State(controller): State<Arc<UserController>>,
        Path(user_id): Path<Uuid>,
        Json(request): Json<UpdateUserRequest>,
    ) -> AppResult<Json<UserProfileUpdateResponse>> {
        let response = controller
            .user_service
            .update_profile(user_id, request)
            .await
            .map_err(AppError::from)?;
        Ok(Json(response))
    }
}
