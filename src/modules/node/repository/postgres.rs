use super::{ContentRepository, Criteria, Error, Node, Result};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgNodeRepository {
    pool: PgPool,
}

impl PgNodeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PgNodeRepository {
    async fn find_all(&self) -> Result<Vec<Node>> {
        sqlx::query_as::<_, Node>(
            "
            SELECT id, type, title, status, created_at, updated_at
            FROM nodes
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch all nodes: {}", err);
            Error::UnexpectedError
        })
    }

    async fn find_by(&self, criteria: Criteria) -> Result<Vec<Node>> {
        sqlx::query_as::<_, Node>(
            "
            SELECT id, type, title, status, created_at, updated_at
            FROM nodes
            WHERE
                id = COALESCE($1, id)
                AND type = COALESCE($2, type)
            ORDER BY id
            ",
        )
        .bind(criteria.id)
        .bind(criteria.node_type.clone())
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch nodes by {:?}: {}",
                criteria,
                err
            );
            Error::UnexpectedError
        })
    }
}
