use super::repository::{self, ContentRepository, Criteria, InMemoryNodeRepository, Node};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;

pub fn node(id: i64, node_type: &str) -> Node {
    Node {
        id,
        node_type: node_type.to_string(),
        title: format!("Node {id}"),
        status: true,
        created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        updated_at: None,
    }
}

/// `n` nodes with ids `1..=n`, alternating between articles and pages.
pub fn nodes(n: i64) -> Vec<Node> {
    (1..=n)
        .map(|id| node(id, if id % 2 == 0 { "page" } else { "article" }))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FindAll,
    FindBy(Criteria),
}

/// Delegates to an in-memory repository and records every call.
pub struct RecordingRepository {
    inner: InMemoryNodeRepository,
    calls: Mutex<Vec<Call>>,
}

impl RecordingRepository {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            inner: InMemoryNodeRepository::new(nodes),
            calls: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentRepository for RecordingRepository {
    async fn find_all(&self) -> repository::Result<Vec<Node>> {
        self.calls.lock().unwrap().push(Call::FindAll);
        self.inner.find_all().await
    }

    async fn find_by(&self, criteria: Criteria) -> repository::Result<Vec<Node>> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::FindBy(criteria.clone()));
        self.inner.find_by(criteria).await
    }
}

pub struct FailingRepository;

#[async_trait]
impl ContentRepository for FailingRepository {
    async fn find_all(&self) -> repository::Result<Vec<Node>> {
        Err(repository::Error::UnexpectedError)
    }

    async fn find_by(&self, _: Criteria) -> repository::Result<Vec<Node>> {
        Err(repository::Error::UnexpectedError)
    }
}
