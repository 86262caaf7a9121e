use super::types::{request, response};
use crate::{
    modules::node::query::{FilterSelector, ListQueryHandler, QueryError},
    types::Context,
    utils::{
        cache::{self, CacheContext, CacheableMetadata, CacheableResponse},
        pagination::Paginated,
    },
};
use axum::http::StatusCode;
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.page.validate().map_err(|errors| {
        tracing::warn!("Failed to validate pagination options: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let selector = FilterSelector::from_params(payload.filters.id, payload.filters.node_type);

    let filter = match &selector {
        FilterSelector::ByType(node_type) => ("type", node_type.clone()),
        FilterSelector::ById(id) => ("id", id.to_string()),
        FilterSelector::None => ("filter", String::from("none")),
    };
    let key = cache::cache_key(
        payload.uri.path(),
        [
            filter,
            ("page_size", payload.page.page_size.to_string()),
            ("page_number", payload.page.page_number.to_string()),
        ],
        &payload.identity,
    );

    let page = ListQueryHandler::new(ctx.nodes.clone())
        .handle(selector, payload.page)
        .await
        .map_err(|err| match err {
            QueryError::PageOutOfRange {
                page_number,
                total_pages,
            } => response::Error::PageOutOfRange {
                page: page_number,
                pages: total_pages,
            },
            QueryError::RepositoryUnavailable => response::Error::FailedToFetchNodes,
        })?;

    Ok(response::Success::Nodes(CacheableResponse {
        status: StatusCode::OK,
        body: Paginated::from(page),
        metadata: CacheableMetadata::new(ctx.cache.max_age).add_cache_context(CacheContext::User),
        key,
    }))
}
