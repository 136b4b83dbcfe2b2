//! Flattening of database export documents
//!
//! Resolves typed wrapper objects to their payload and collapses nested
//! objects into dot-qualified keys, leaving arrays in place.

pub mod transform;
pub mod wrapper;

pub use transform::{flatten, flatten_document};
pub use wrapper::{classify_wrapper, take_wrapper, Wrapper};
