// src/connection.rs
use crate::config::Config;
use crate::error::ConnectError;
use crate::store::{Connector, Session, StoreError};
use tracing::{error, info, Span};

pub const SCHEME: &str = "mongodb";

/// Builds a connection string for MongoDB.
///
/// An empty `username` selects the unauthenticated form and `password` is
/// dropped, even when it is not empty. Nothing is escaped.
pub fn build_uri(host: &str, username: &str, password: &str, port: u16) -> String {
    if username.is_empty() {
        format!("{SCHEME}://{host}:{port}")
    } else {
        format!("{SCHEME}://{username}:{password}@{host}:{port}")
    }
}

/// Opens a connection for `config` and pings it.
///
/// If the ping fails the session is closed before the error is returned.
pub async fn connect<C: Connector>(
    log: &Span,
    connector: &C,
    config: &Config,
) -> Result<C::Session, ConnectError> {
    let dsn = config.uri();
    info!(parent: log, dsn = %dsn, "attempting to connect to MongoDB");

    let uri = config.redacted_uri();
    let session = match connector.connect(&dsn).await {
        Ok(session) => session,
        Err(e) => {
            error!(parent: log, error = %e, "failed to connect");
            return Err(ConnectError::Connection { uri, source: e });
        }
    };

    if let Err(e) = session.ping().await {
        error!(parent: log, error = %e, "ping failed for MongoDB client");
        disconnect(log, session).await;
        return Err(match e {
            StoreError::Unreachable(_) | StoreError::Rejected(_) => {
                ConnectError::Connection { uri, source: e }
            }
            StoreError::Driver(_) => ConnectError::LivenessCheckFailed { uri, source: e },
        });
    }

    info!(parent: log, "connected to MongoDB");
    Ok(session)
}

pub async fn disconnect<S: Session>(log: &Span, session: S) {
    if let Err(e) = session.close().await {
        error!(parent: log, error = %e, "error while disconnecting from MongoDB");
    }
    info!(parent: log, "connection to MongoDB closed");
}
