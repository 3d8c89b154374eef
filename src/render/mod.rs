//! Window, wgpu surface, and egui frame plumbing.

pub mod app;
pub mod context;
pub mod renderer;
pub mod ui;
