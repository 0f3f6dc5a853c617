//! Core pipeline modules for XmlTab.
//!
//! Contains the record model, XML extraction, the column registry, the
//! sort/search/filter query pipeline, and pagination. Everything here is
//! UI-free and exercised directly by the integration tests.

pub mod columns;
pub mod extractor;
pub mod paginator;
pub mod query;
pub mod record;
