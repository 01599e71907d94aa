//! # Pulseboard
//!
//! A minimal admin dashboard service: a REST API over a document store of
//! category/value records, plus static hosting for the dashboard client.
//!
//! ## Modules
//!
//! - [`store`]: Record document store (SQLite and in-memory backends)
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pulseboard::store::{open_store, NewRecord};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = open_store("memory://")?;
//!
//!     store.insert(NewRecord::new("sales", 100.0)).await?;
//!     store.insert(NewRecord::new("costs", 40.0)).await?;
//!
//!     let records = store.list().await?;
//!     println!("{} records", records.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod store;

pub use store::{
    open_store, MemoryStore, NewRecord, Record, RecordStore, SqliteStore, StoreError,
    StoreResult,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, ConfigLoad, LoggingConfig, ServerConfig, StoreConfig};
