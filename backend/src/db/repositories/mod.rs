//! Repository implementations module.
//!
//! This module contains the implementations of the `CatalogRepository` trait:
//! - `csv`: reads the KOI table from a CSV file on every load
//! - `local`: In-memory implementation for unit testing and local development
pub mod csv;
pub mod local;

pub use self::csv::CsvRepository;
pub use local::LocalRepository;
