use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json, RequestPartsExt,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::cache;

/// Wire envelope returned by listing endpoints.
#[derive(Serialize, Debug)]
pub struct Paginated<T> {
    pub result: Vec<T>,
    pub page: u32,
    pub pages: u32,
}

impl<T> From<PageResult<T>> for Paginated<T> {
    fn from(page: PageResult<T>) -> Self {
        Self {
            result: page.items,
            page: page.page_number,
            pages: page.total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page_number: u32,
    pub total_pages: u32,
}

/// Pagination options as sent by the client.
///
/// A `page_size` of zero disables pagination. Page numbers are 1-based.
#[derive(Deserialize, Validate, Debug, Clone, Copy, PartialEq)]
pub struct PageRequest {
    #[serde(default, alias = "pageSize")]
    pub page_size: u32,
    #[serde(default = "default_page_number", alias = "pageNumber")]
    #[validate(range(min = 1))]
    pub page_number: u32,
}

fn default_page_number() -> u32 {
    1
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_size: 0,
            page_number: default_page_number(),
        }
    }
}

impl PageRequest {
    #[cfg(test)]
    pub fn new(page_size: u32, page_number: u32) -> Self {
        Self {
            page_size,
            page_number,
        }
    }

    #[cfg(test)]
    pub fn unpaginated() -> Self {
        Self::default()
    }

    pub fn is_paginated(&self) -> bool {
        self.page_size > 0
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for PageRequest {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extract::<Query<PageRequest>>().await {
            Ok(Query(page)) => Ok(page),
            _ => Err(cache::no_store(
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid pagination options"})),
                )
                    .into_response(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOutOfRange {
    pub page_number: u32,
    pub total_pages: u32,
}

/// Counts the chunks `len` items split into when grouped by `page_size`.
pub fn total_pages(len: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }

    len.div_ceil(page_size as usize) as u32
}

/// Splits `items` into consecutive chunks of `page.page_size` and returns the
/// chunk addressed by the 1-based `page.page_number`.
///
/// With a page size of zero every item lands on a single page and the
/// requested page number is echoed back untouched.
pub fn paginate<T>(items: Vec<T>, page: &PageRequest) -> Result<PageResult<T>, PageOutOfRange> {
    let total_pages = total_pages(items.len(), page.page_size);

    if !page.is_paginated() {
        return Ok(PageResult {
            items,
            page_number: page.page_number,
            total_pages,
        });
    }

    if page.page_number == 0 || page.page_number > total_pages {
        return Err(PageOutOfRange {
            page_number: page.page_number,
            total_pages,
        });
    }

    let page_size = page.page_size as usize;
    let chunk_index = (page.page_number - 1) as usize;

    Ok(PageResult {
        items: items
            .into_iter()
            .skip(chunk_index * page_size)
            .take(page_size)
            .collect(),
        page_number: page.page_number,
        total_pages,
    })
}
