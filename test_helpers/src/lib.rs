//! Test helpers shared across crates.
//!
//! This crate provides canonical configuration documents, temporary
//! on-disk documents and JSON text helpers.

pub mod files;
pub mod fixtures;
pub mod text;
