use super::{ContentRepository, Criteria, Error, Node, Result};
use async_trait::async_trait;
use std::path::Path;

/// Keeps nodes in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryNodeRepository {
    nodes: Vec<Node>,
}

impl InMemoryNodeRepository {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Loads a JSON array of nodes.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path).map_err(|err| {
            tracing::error!("Failed to read node seed file {}: {}", path.display(), err);
            Error::UnexpectedError
        })?;

        let nodes = serde_json::from_str::<Vec<Node>>(&raw).map_err(|err| {
            tracing::error!("Invalid node seed file {}: {}", path.display(), err);
            Error::UnexpectedError
        })?;

        tracing::debug!("Loaded {} nodes from {}", nodes.len(), path.display());

        Ok(Self::new(nodes))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[async_trait]
impl ContentRepository for InMemoryNodeRepository {
    async fn find_all(&self) -> Result<Vec<Node>> {
        Ok(self.nodes.clone())
    }

    async fn find_by(&self, criteria: Criteria) -> Result<Vec<Node>> {
        Ok(self
            .nodes
            .iter()
            .filter(|node| criteria.matches(node))
            .cloned()
            .collect())
    }
}
