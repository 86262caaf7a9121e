pub mod request {
    use crate::{modules::auth::Identity, utils::pagination::PageRequest};
    use axum::http::Uri;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, Default)]
    pub struct Filters {
        pub id: Option<i64>,
        #[serde(rename = "type")]
        pub node_type: Option<String>,
    }

    pub struct Payload {
        pub identity: Identity,
        pub uri: Uri,
        pub filters: Filters,
        pub page: PageRequest,
    }
}

pub mod response {
    use axum::{
        extract::{rejection::QueryRejection, Json},
        http::StatusCode,
        response::IntoResponse,
    };
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{
        modules::node::repository::Node,
        utils::{
            self,
            cache::{self, CacheableResponse},
            pagination::Paginated,
        },
    };

    pub enum Success {
        Nodes(CacheableResponse<Paginated<Node>>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Nodes(nodes) => nodes.into_response(),
            }
        }
    }

    pub enum Error {
        InvalidFilters(QueryRejection),
        FailedToValidate(ValidationErrors),
        PageOutOfRange { page: u32, pages: u32 },
        FailedToFetchNodes,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            cache::no_store(match self {
                Self::InvalidFilters(rejection) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": rejection.body_text() })),
                )
                    .into_response(),
                Self::FailedToValidate(errors) => {
                    utils::validation::into_response(errors)
                }
                Self::PageOutOfRange { page, pages } => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Page out of range", "page": page, "pages": pages })),
                )
                    .into_response(),
                Self::FailedToFetchNodes => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch nodes" })),
                )
                    .into_response(),
            })
        }
    }

    pub type Response = Result<Success, Error>;
}
