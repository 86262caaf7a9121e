use super::repository::{ContentRepository, Criteria, Node};
use crate::utils::pagination::{self, PageRequest, PageResult};
use std::sync::Arc;

/// Which nodes a listing is restricted to.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterSelector {
    ByType(String),
    ById(i64),
    None,
}

impl FilterSelector {
    /// Picks a single filter, type first, then id. An empty type and an id of
    /// zero count as not given.
    pub fn from_params(id: Option<i64>, node_type: Option<String>) -> Self {
        match (node_type.filter(|t| !t.is_empty()), id.filter(|id| *id != 0)) {
            (Some(node_type), _) => Self::ByType(node_type),
            (None, Some(id)) => Self::ById(id),
            (None, None) => Self::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("page {page_number} is out of range (total pages: {total_pages})")]
    PageOutOfRange { page_number: u32, total_pages: u32 },
    #[error("content repository is unavailable")]
    RepositoryUnavailable,
}

impl From<pagination::PageOutOfRange> for QueryError {
    fn from(err: pagination::PageOutOfRange) -> Self {
        Self::PageOutOfRange {
            page_number: err.page_number,
            total_pages: err.total_pages,
        }
    }
}

pub struct ListQueryHandler {
    repository: Arc<dyn ContentRepository>,
}

impl ListQueryHandler {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        selector: FilterSelector,
        page: PageRequest,
    ) -> Result<PageResult<Node>, QueryError> {
        tracing::debug!("Listing nodes with {:?} and {:?}", selector, page);

        let nodes = match selector {
            FilterSelector::ByType(node_type) => {
                self.repository.find_by(Criteria::by_type(node_type)).await
            }
            FilterSelector::ById(id) => self.repository.find_by(Criteria::by_id(id)).await,
            FilterSelector::None => self.repository.find_all().await,
        }
        .map_err(|_| QueryError::RepositoryUnavailable)?;

        pagination::paginate(nodes, &page).map_err(|err| {
            tracing::warn!(
                "Requested page {} of {} pages",
                err.page_number,
                err.total_pages
            );
            QueryError::from(err)
        })
    }
}
