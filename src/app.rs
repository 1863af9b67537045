// src/app.rs
use crate::config::Config;
use crate::connection::{connect, disconnect};
use crate::error::ConnectError;
use crate::store::Connector;
use crate::trainers::{run_demo, DemoReport};
use tracing::{error, Span};

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Connects, runs the demo sequence against `config.collection`, and disconnects.
///
/// Only a failed connect or ping is returned as an error; nothing is retried.
pub async fn run<C: Connector>(
    log: &Span,
    connector: &C,
    config: &Config,
) -> Result<DemoReport, ConnectError> {
    let session = match connect(log, connector, config).await {
        Ok(session) => session,
        Err(e) => {
            error!(parent: log, error = %e, "cannot continue ahead: exiting");
            return Err(e);
        }
    };

    let report = run_demo(log, &session, &config.collection).await;
    disconnect(log, session).await;
    Ok(report)
}

pub fn exit_status<T>(outcome: &Result<T, ConnectError>) -> u8 {
    match outcome {
        Ok(_) => EXIT_OK,
        Err(_) => EXIT_FAILURE,
    }
}
