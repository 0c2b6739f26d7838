pub mod client;
pub mod config;
pub mod data_models;
pub mod error;
pub mod render;

pub use client::SearchClient;
pub use data_models::SearchResult;
pub use error::SearchError;
