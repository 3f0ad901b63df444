//! Core classification building blocks: prompt construction, response
//! parsing, and the per-review pipeline. These are internal primitives
//! consumed by the high-level `api` module.
pub mod classify;
pub mod params;
