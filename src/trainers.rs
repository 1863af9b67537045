// src/trainers.rs
use crate::store::{Session, UpdateOutcome};
use anyhow::Result;
use bson::{doc, Bson};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn, Span};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    pub name: String,
    pub age: i32,
    pub city: String,
}

impl Trainer {
    pub fn new(name: &str, age: i32, city: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            city: city.to_string(),
        }
    }
}

pub fn roster() -> Vec<Trainer> {
    vec![
        Trainer::new("Ash", 10, "Pallet Town"),
        Trainer::new("Misty", 10, "Cerulean City"),
        Trainer::new("Brock", 15, "Pewter City"),
    ]
}

/// What the demo sequence managed to do. Failed steps are left empty.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DemoReport {
    pub inserted: Vec<Bson>,
    pub update: Option<UpdateOutcome>,
    pub found: Option<Trainer>,
}

pub async fn insert<S, T>(log: &Span, session: &S, collection: &str, record: &T) -> Result<Bson>
where
    S: Session,
    T: Serialize,
{
    let result = async {
        let doc = bson::to_document(record)?;
        Ok::<_, anyhow::Error>(session.insert_one(collection, doc).await?)
    }
    .await;

    match &result {
        Ok(id) => info!(parent: log, id = %id, "inserted a single document"),
        Err(e) => error!(parent: log, error = %e, "unable to insert document"),
    }
    result
}

/// Increments `age` on the first trainer called `name`.
pub async fn birthday<S: Session>(
    log: &Span,
    session: &S,
    collection: &str,
    name: &str,
) -> Result<UpdateOutcome> {
    let filter = doc! { "name": name };
    let update = doc! { "$inc": { "age": 1 } };

    match session.update_one(collection, filter, update).await {
        Ok(outcome) => {
            info!(
                parent: log,
                matched = outcome.matched,
                modified = outcome.modified,
                "updated documents"
            );
            Ok(outcome)
        }
        Err(e) => {
            error!(parent: log, error = %e, "unable to update document");
            Err(e.into())
        }
    }
}

pub async fn find_by_name<S: Session>(
    log: &Span,
    session: &S,
    collection: &str,
    name: &str,
) -> Result<Option<Trainer>> {
    let result = async {
        let found = match session.find_one(collection, doc! { "name": name }).await? {
            Some(doc) => Some(bson::from_document::<Trainer>(doc)?),
            None => None,
        };
        Ok::<_, anyhow::Error>(found)
    }
    .await;

    match &result {
        Ok(Some(trainer)) => info!(parent: log, document = ?trainer, "found document"),
        Ok(None) => warn!(parent: log, name, "no document matched"),
        Err(e) => error!(parent: log, error = %e, "unable to find document"),
    }
    result
}

/// Inserts the roster, gives Ash a birthday, then reads Ash back.
///
/// A failed step is logged and skipped; later steps still run.
pub async fn run_demo<S: Session>(log: &Span, session: &S, collection: &str) -> DemoReport {
    let mut report = DemoReport::default();

    for trainer in roster() {
        if let Ok(id) = insert(log, session, collection, &trainer).await {
            report.inserted.push(id);
        }
    }
    report.update = birthday(log, session, collection, "Ash").await.ok();
    report.found = find_by_name(log, session, collection, "Ash").await.ok().flatten();

    report
}
