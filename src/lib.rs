pub mod app;
pub mod cli;
pub mod config;
pub mod connection;
pub mod error;
pub mod logging;
pub mod mongo;
pub mod store;
pub mod trainers;
