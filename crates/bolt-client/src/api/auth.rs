//! Auth endpoints: `/auth/*`.

use bolt_core::types::User;
use serde::{Deserialize, Serialize};

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::response::ApiResponse;

// =============================================================================
// Input DTOs
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// =============================================================================
// Payloads
// =============================================================================

/// Token plus the user it belongs to, returned by login and register.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Deserialize)]
struct UserData {
    user: User,
}

// =============================================================================
// Operations
// =============================================================================

/// Log in with email and password. The returned token goes into
/// [`ApiClient::with_token`](crate::ApiClient::with_token) for every
/// subsequent call.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> ClientResult<AuthSession> {
    let resp: ApiResponse<AuthSession> = client.post("auth/login", request).await?;
    resp.into_data("session")
}

/// Register a new back-office user and log them in.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> ClientResult<AuthSession> {
    let resp: ApiResponse<AuthSession> = client.post("auth/register", request).await?;
    resp.into_data("session")
}

/// The user the current token belongs to.
pub async fn me(client: &ApiClient) -> ClientResult<User> {
    let resp: ApiResponse<UserData> = client.get("auth/me").await?;
    Ok(resp.into_data("user")?.user)
}

/// Update name and email on the current user.
pub async fn update_profile(client: &ApiClient, update: &ProfileUpdate) -> ClientResult<User> {
    let resp: ApiResponse<UserData> = client.put("auth/profile", update).await?;
    Ok(resp.into_data("user")?.user)
}

/// Change the current user's password.
pub async fn change_password(
    client: &ApiClient,
    request: &ChangePasswordRequest,
) -> ClientResult<()> {
    let _resp: ApiResponse<serde_json::Value> =
        client.put("auth/change-password", request).await?;
    Ok(())
}

/// Invalidate the token server-side. The caller drops its local copy too.
pub async fn logout(client: &ApiClient) -> ClientResult<()> {
    let _resp: ApiResponse<serde_json::Value> = client.post_empty("auth/logout").await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_session_deserializes() {
        let json = r#"{"token": "jwt-abc", "user": {"_id": "u1", "name": "Asha", "email": "asha@shop.in", "role": "admin"}}"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.token, "jwt-abc");
        assert_eq!(session.user.role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_change_password_wire_shape() {
        let req = ChangePasswordRequest {
            current_password: "old".to_string(),
            new_password: "new".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("currentPassword").is_some());
        assert!(json.get("newPassword").is_some());
    }
}
