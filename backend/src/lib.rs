//! # Kepler Explorer
//!
//! Backend for browsing the Kepler Objects of Interest (KOI) catalog.
//!
//! The crate loads the KOI table, classifies and scores each planet against
//! habitability heuristics, aggregates dispositions for the dashboard charts,
//! and serves filtered, paginated views over a REST API built on Axum.
//!
//! ## Architecture
//!
//! - [`models`]: planet record, disposition and score types
//! - [`algorithms`]: classifiers, habitability scorer, disposition aggregation
//! - [`transformations`]: range/text/disposition filters and pagination
//! - [`parsing`]: CSV loader for the archive export
//! - [`db`]: repository trait, CSV and in-memory sources, explicit cache
//! - [`services`]: per-endpoint business logic
//! - [`config`]: TOML + environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use kepler_explorer::algorithms::{is_habitable_strict, score};
//! use kepler_explorer::models::{Disposition, PlanetRecord};
//!
//! let planet = PlanetRecord::new("K00701.04")
//!     .with_disposition(Disposition::Confirmed)
//!     .with_radius(1.2)
//!     .with_temperature(260.0)
//!     .with_insolation(0.9)
//!     .with_period(200.0);
//!
//! assert_eq!(score(&planet), 95);
//! assert!(is_habitable_strict(&planet));
//! ```

pub mod algorithms;
pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod parsing;
pub mod services;
pub mod transformations;

#[cfg(feature = "http-server")]
pub mod http;
