//! # Smelt - Flatten Database Exports for Columnar Loading
//!
//! Converts line-delimited JSON exports from a document database into
//! flattened line-delimited JSON that a columnar warehouse can load.
//!
//! ## Modules
//!
//! - **flatten**: Resolve `$date` / `$oid` / `$ref` wrappers and dot-flatten nested objects
//! - **process**: Read NDJSON files, flatten each document, write `_processed` siblings
//!
//! ## Quick Start
//!
//! ```rust
//! use smelt::flatten;
//! use serde_json::json;
//!
//! let doc = json!({
//!     "_id": {"$oid": "abc123"},
//!     "createdAt": {"$date": "2020-01-01T00:00:00Z"},
//!     "address": {"city": "X", "zip": "0"},
//!     "items": [{"id": {"$oid": "x"}}]
//! });
//!
//! assert_eq!(
//!     flatten(&doc),
//!     json!({
//!         "_id": "abc123",
//!         "createdAt": "2020-01-01T00:00:00Z",
//!         "address.city": "X",
//!         "address.zip": "0",
//!         "items": [{"id": "x"}]
//!     })
//! );
//! ```

pub mod config;
pub mod error;
pub mod flatten;
pub mod process;

// Re-export commonly used types for convenience
pub use config::{ParserBackend, ProcessConfig, DEFAULT_INPUTS};
pub use error::{Result, SmeltError};
pub use flatten::{classify_wrapper, flatten, flatten_document, take_wrapper, Wrapper};
pub use process::{flatten_stream, output_path, process_file, DocumentWriter, ProcessReport};
