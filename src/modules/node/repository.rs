mod memory;
mod postgres;

pub use memory::InMemoryNodeRepository;
pub use postgres::PgNodeRepository;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Node {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub node_type: String,
    pub title: String,
    pub status: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Field constraints for [`ContentRepository::find_by`]. Every field that is
/// set must match.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Criteria {
    pub id: Option<i64>,
    pub node_type: Option<String>,
}

impl Criteria {
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn by_type(node_type: impl Into<String>) -> Self {
        Self {
            node_type: Some(node_type.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, node: &Node) -> bool {
        self.id.map_or(true, |id| node.id == id)
            && self
                .node_type
                .as_deref()
                .map_or(true, |node_type| node.node_type == node_type)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    UnexpectedError,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Read access to stored nodes. Both calls return nodes in the same
/// repository-defined order.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Node>>;

    async fn find_by(&self, criteria: Criteria) -> Result<Vec<Node>>;
}
