//! User-facing views.

pub mod components;
