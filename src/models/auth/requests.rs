use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// POST /auth dispatches on ?action=login|logout
#[derive(Debug, Clone, Deserialize)]
pub struct AuthActionParams {
    pub action: String,
}
