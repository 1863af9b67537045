use clap::Parser;
use mongo_trainers::app::{exit_status, run, EXIT_FAILURE};
use mongo_trainers::cli::Cli;
use mongo_trainers::config::Config;
use mongo_trainers::logging;
use mongo_trainers::mongo::MongoConnector;
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();
    logging::init(&args.log_level);
    let log = logging::root_span();

    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            error!(parent: &log, error = ?e, "invalid configuration");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let connector = MongoConnector::new(config.database.as_str());
    let outcome = run(&log, &connector, &config).await;
    ExitCode::from(exit_status(&outcome))
}
