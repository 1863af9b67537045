use crate::store::StoreError;
use thiserror::Error;

/// Failures that stop the program before any CRUD call is attempted.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("failed to connect to {uri}")]
    Connection {
        uri: String,
        #[source]
        source: StoreError,
    },

    #[error("liveness check against {uri} failed")]
    LivenessCheckFailed {
        uri: String,
        #[source]
        source: StoreError,
    },
}
