#![forbid(unsafe_code)]

//! Core: geometry, layout effects, and logging shared by quilt crates.

pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
