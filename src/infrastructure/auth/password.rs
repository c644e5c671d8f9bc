use crate::error::{AppError, AppResult};

/// Hash a plaintext password with bcrypt at the default cost
pub fn hash_password(password: &str) -> AppResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Verify a plaintext password against a stored bcrypt hash
pub fn verify_password(password: &str, hashed: &str) -> AppResult<bool> {
    bcrypt::verify(password, hashed)
        .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))
}
