//! The database operations this program needs, independent of any driver.
use async_trait::async_trait;
use bson::{Bson, Document};
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No server could be reached at all.
    #[error("server unreachable: {0}")]
    Unreachable(#[source] BoxError),

    /// The server refused the credentials.
    #[error("authentication rejected: {0}")]
    Rejected(#[source] BoxError),

    #[error("{0}")]
    Driver(#[source] BoxError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

#[async_trait]
pub trait Connector: Send + Sync {
    type Session: Session;

    async fn connect(&self, uri: &str) -> Result<Self::Session, StoreError>;
}

/// An open connection. `close` consumes it, so it is released at most once.
#[async_trait]
pub trait Session: Send + Sync + Sized {
    async fn ping(&self) -> Result<(), StoreError>;

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<Bson, StoreError>;

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<UpdateOutcome, StoreError>;

    async fn find_one(&self, collection: &str, filter: Document)
        -> Result<Option<Document>, StoreError>;

    async fn close(self) -> Result<(), StoreError>;
}
