pub mod client;
pub mod config;
pub mod detail;
pub mod error;
pub mod language;
pub mod lister;
pub mod materializer;
pub mod readme;
pub mod settings;
pub mod stats;
pub mod types;
