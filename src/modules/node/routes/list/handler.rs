use super::{
    service::service,
    types::{request, response},
};
use crate::{modules::auth::Identity, types::Context, utils::pagination::PageRequest};
use axum::extract::{rejection::QueryRejection, OriginalUri, Query, State};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    identity: Identity,
    OriginalUri(uri): OriginalUri,
    filters: Result<Query<request::Filters>, QueryRejection>,
    page: PageRequest,
) -> response::Response {
    let Query(filters) = filters.map_err(response::Error::InvalidFilters)?;

    service(
        ctx,
        request::Payload {
            identity,
            uri,
            filters,
            page,
        },
    )
    .await
}
