// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

/// Connects to MongoDB, runs a few CRUD operations on a trainers collection, and disconnects.
///
/// Flags left unset fall back to the config file, then to the built-in defaults.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Host running MongoDB [default: localhost]
    #[arg(long = "net.host", value_name = "HOST")]
    pub host: Option<String>,

    /// Port for MongoDB [default: 27017]
    #[arg(long = "net.port", value_name = "PORT", value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// User for MongoDB
    #[arg(long = "db.username", value_name = "USER")]
    pub username: Option<String>,

    /// Password for MongoDB, ignored when no user is given
    #[arg(long = "db.password", value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Database holding the collection [default: test]
    #[arg(long = "db.name", value_name = "NAME")]
    pub database: Option<String>,

    /// Collection to operate on [default: trainers]
    #[arg(long = "db.collection", value_name = "NAME")]
    pub collection: Option<String>,

    /// YAML file with `net` and `db` sections
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long = "log.level", value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}
