use serde::{Deserialize, Serialize};

/// Login request (`POST /auth/login`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration request (`POST /auth/register`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Token refresh request (`POST /auth/refresh-token`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Token pair plus identity, returned by login and refresh
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: AuthUser,
}

/// Identity embedded in [`AuthResponse`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_request_wire_name() {
        let json = serde_json::to_string(&RefreshTokenRequest {
            refresh_token: "r-1".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"refreshToken":"r-1"}"#);
    }

    #[test]
    fn test_auth_response_from_camel_case() {
        let response: AuthResponse = serde_json::from_str(
            r#"{"accessToken":"A","refreshToken":"B","user":{"id":"1","username":"bob","email":"b@x.com"}}"#,
        )
        .unwrap();
        assert_eq!(response.access_token, "A");
        assert_eq!(response.refresh_token, "B");
        assert_eq!(response.user.id, "1");
    }
}
