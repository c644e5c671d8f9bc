use uuid::Uuid;

/// Build the session token returned on successful login.
///
/// This is an intentionally trivial placeholder token, not a credential. It
/// exists so clients have a stable string to hold on to; nothing in the API
/// validates it.
pub fn session_token_for(user_id: Uuid) -> String {
    format!("dummy_session_token_for_user_{}", user_id)
}
