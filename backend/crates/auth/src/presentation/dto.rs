//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::SignUpOutput;

// ============================================================================
// Requests
// ============================================================================

/// Body of both `POST /signup` and `POST /login`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CredentialsRequest {
    #[schema(example = "alice")]
    pub user_id: String,
    /// At least 8 characters at signup
    #[schema(example = "password123")]
    pub password: String,
}

pub type SignUpRequest = CredentialsRequest;
pub type LoginRequest = CredentialsRequest;

// ============================================================================
// Responses
// ============================================================================

/// Public view of a user. The password hash has no field here.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserInfoResponse {
    pub id: String,
    pub user_id: String,
}

impl From<SignUpOutput> for UserInfoResponse {
    fn from(output: SignUpOutput) -> Self {
        Self {
            id: output.id,
            user_id: output.user_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
