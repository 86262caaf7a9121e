use crate::modules::auth::Identity;
use axum::{
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sha2::{Digest, Sha256};

pub const X_CACHE_KEY: HeaderName = HeaderName::from_static("x-cache-key");

/// Request properties a cached response depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheContext {
    User,
}

impl CacheContext {
    fn vary_header(&self) -> &'static str {
        match self {
            Self::User => "Authorization",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CacheableMetadata {
    contexts: Vec<CacheContext>,
    max_age: u32,
}

impl CacheableMetadata {
    pub fn new(max_age: u32) -> Self {
        Self {
            contexts: vec![],
            max_age,
        }
    }

    pub fn add_cache_context(mut self, context: CacheContext) -> Self {
        if !self.contexts.contains(&context) {
            self.contexts.push(context);
        }
        self
    }

    pub fn varies_by_user(&self) -> bool {
        self.contexts.contains(&CacheContext::User)
    }

    fn cache_control(&self) -> String {
        let scope = if self.varies_by_user() {
            "private"
        } else {
            "public"
        };
        format!("{}, max-age={}", scope, self.max_age)
    }

    fn vary(&self) -> Option<String> {
        if self.contexts.is_empty() {
            return None;
        }

        Some(
            self.contexts
                .iter()
                .map(CacheContext::vary_header)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

/// Derives the key a response for `path` is cached under for `identity`.
///
/// `params` are the already parsed request values the response depends on;
/// they are sorted first so their order does not matter.
pub fn cache_key<'a>(
    path: &str,
    params: impl IntoIterator<Item = (&'a str, String)>,
    identity: &Identity,
) -> String {
    let mut pairs = params
        .into_iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>();
    pairs.sort_unstable();

    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    hasher.update(b"?");
    hasher.update(pairs.join("&").as_bytes());
    hasher.update(b"|");
    hasher.update(identity.cache_key().as_bytes());

    hex::encode(hasher.finalize())
}

/// JSON body annotated with the cache metadata the outer layers need.
pub struct CacheableResponse<T> {
    pub status: StatusCode,
    pub body: T,
    pub metadata: CacheableMetadata,
    pub key: String,
}

impl<T: Serialize> IntoResponse for CacheableResponse<T> {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();

        if let Ok(value) = HeaderValue::from_str(&self.metadata.cache_control()) {
            headers.insert(header::CACHE_CONTROL, value);
        }
        if let Some(Ok(value)) = self.metadata.vary().map(|v| HeaderValue::from_str(&v)) {
            headers.insert(header::VARY, value);
        }
        if let Ok(value) = HeaderValue::from_str(&self.key) {
            headers.insert(X_CACHE_KEY, value);
        }

        (self.status, headers, Json(self.body)).into_response()
    }
}

/// Marks a response as not cacheable.
pub fn no_store(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store"),
    );
    response
}

#[cfg(test)]
mod test {
    use super::*;

    const PATH: &str = "/api/nodes/list";

    fn params(page_number: u32) -> Vec<(&'static str, String)> {
        vec![
            ("type", "article".to_string()),
            ("page_size", "3".to_string()),
            ("page_number", page_number.to_string()),
        ]
    }

    #[test]
    fn should_ignore_param_order() {
        let identity = Identity::Anonymous;
        let mut reversed = params(1);
        reversed.reverse();

        assert_eq!(
            cache_key(PATH, params(1), &identity),
            cache_key(PATH, reversed, &identity)
        );
    }

    #[test]
    fn should_vary_by_identity() {
        let anonymous = cache_key(PATH, params(1), &Identity::Anonymous);
        let alice = cache_key(PATH, params(1), &Identity::Bearer("alice".to_string()));
        let bob = cache_key(PATH, params(1), &Identity::Bearer("bob".to_string()));

        assert_ne!(anonymous, alice);
        assert_ne!(alice, bob);
        assert_eq!(
            alice,
            cache_key(PATH, params(1), &Identity::Bearer("alice".to_string()))
        );
    }

    #[test]
    fn should_vary_by_params() {
        let identity = Identity::Anonymous;

        assert_ne!(
            cache_key(PATH, params(1), &identity),
            cache_key(PATH, params(2), &identity)
        );
    }

    #[test]
    fn should_set_private_headers_for_user_context() {
        let response = CacheableResponse {
            status: StatusCode::OK,
            body: serde_json::json!({}),
            metadata: CacheableMetadata::new(60).add_cache_context(CacheContext::User),
            key: String::from("abc"),
        }
        .into_response();

        let headers = response.headers();
        assert_eq!(headers[header::CACHE_CONTROL], "private, max-age=60");
        assert_eq!(headers[header::VARY], "Authorization");
        assert_eq!(headers[X_CACHE_KEY], "abc");
    }

    #[test]
    fn should_not_duplicate_contexts() {
        let metadata = CacheableMetadata::new(10)
            .add_cache_context(CacheContext::User)
            .add_cache_context(CacheContext::User);

        assert_eq!(metadata.vary().as_deref(), Some("Authorization"));
    }
}
