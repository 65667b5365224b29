//! Data models
//!
//! Value types shared between the floor engine and the host UI.
//! Raw numbers from the UI are validated once, at construction of
//! [`TableNumber`] and [`ServerCount`].

pub mod section;
pub mod table;

// Re-exports
pub use section::*;
pub use table::*;
