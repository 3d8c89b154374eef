//! Export surface: CSS generation, JSON config, debounced recomputation.

pub mod cache;
pub mod css;
pub mod json;

pub use cache::ExportCache;
