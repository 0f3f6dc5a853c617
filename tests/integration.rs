//! Integration tests for XmlTab.
//!
//! These tests exercise the core pipeline end-to-end through the library
//! crate: extraction, column registry, query pipeline, and pagination.

mod columns_persistence;
mod constants_validation;
mod pipeline_roundtrip;
