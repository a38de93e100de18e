//! liftcheck-core — Mobility assessment engine and warmup planning.
//!
//! This crate holds the test catalog model, the compiled-in lift and area
//! tables, the interactive assessment loop, and warmup plan generation.

pub mod areas;
pub mod catalog;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod model;
pub mod plan;
