// src/store/mod.rs
pub mod client;
pub mod types;

pub use client::{parse_create_response, TableStoreClient};
pub use types::ImportOutcome;
