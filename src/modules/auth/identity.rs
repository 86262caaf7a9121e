use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{self, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sha2::{Digest, Sha256};

use crate::utils::cache;

/// Who is asking. Only used to keep cached responses apart; tokens are never
/// verified here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    Bearer(String),
}

enum Error {
    InvalidSession,
}

fn get_token_from_header(header: &str) -> Result<String, Error> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(Error::InvalidSession)
}

impl Identity {
    /// Stable key for this identity that does not leak the token.
    pub fn cache_key(&self) -> String {
        match self {
            Self::Anonymous => String::from("anonymous"),
            Self::Bearer(token) => format!("user:{}", hex::encode(Sha256::digest(token))),
        }
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Identity {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(http::header::AUTHORIZATION) else {
            return Ok(Self::Anonymous);
        };

        header
            .to_str()
            .map_err(|_| Error::InvalidSession)
            .and_then(get_token_from_header)
            .map(Self::Bearer)
            .map_err(|_| {
                tracing::debug!("Rejected malformed authorization header");
                cache::no_store(
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({"error": "Invalid session token"})),
                    )
                        .into_response(),
                )
            })
    }
}
