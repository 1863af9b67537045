// src/mongo.rs
use crate::store::{Connector, Session, StoreError, UpdateOutcome};
use async_trait::async_trait;
use bson::{doc, Bson, Document};
use mongodb::error::{Error, ErrorKind};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

pub struct MongoConnector {
    database: String,
}

impl MongoConnector {
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
        }
    }
}

#[async_trait]
impl Connector for MongoConnector {
    type Session = MongoSession;

    async fn connect(&self, uri: &str) -> Result<MongoSession, StoreError> {
        let client_options = ClientOptions::parse(uri).await.map_err(classify)?;
        let client = Client::with_options(client_options).map_err(classify)?;
        let database = client.database(&self.database);
        Ok(MongoSession { client, database })
    }
}

pub struct MongoSession {
    client: Client,
    database: Database,
}

impl MongoSession {
    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

#[async_trait]
impl Session for MongoSession {
    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(classify)
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<Bson, StoreError> {
        let result = self.collection(collection).insert_one(doc).await.map_err(classify)?;
        Ok(result.inserted_id)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<UpdateOutcome, StoreError> {
        let result = self
            .collection(collection)
            .update_one(filter, update)
            .await
            .map_err(classify)?;
        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        self.collection(collection).find_one(filter).await.map_err(classify)
    }

    async fn close(self) -> Result<(), StoreError> {
        self.client.shutdown().await;
        Ok(())
    }
}

// The driver connects lazily, so an unreachable server or bad credentials
// first show up on the ping rather than on connect.
fn classify(err: Error) -> StoreError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::DnsResolve { .. } | ErrorKind::Io(_) => {
            StoreError::Unreachable(Box::new(err))
        }
        ErrorKind::Authentication { .. } => StoreError::Rejected(Box::new(err)),
        _ => StoreError::Driver(Box::new(err)),
    }
}
