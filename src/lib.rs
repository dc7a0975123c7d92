// Library for the binary and tests

pub mod config;
pub mod error;
pub mod models;
pub mod monitoring_repo;
pub mod options;
pub mod report;
pub mod version;
