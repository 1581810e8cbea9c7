//! Catalog data access.
//!
//! Planet records are reached through the [`CatalogRepository`] trait so the
//! storage behind it can be swapped without touching services or handlers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, services)                 │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┼───────────────────┐
//!     │               │                   │
//! ┌───▼──────────┐ ┌──▼────────────┐ ┌────▼──────────────┐
//! │ CsvRepository│ │LocalRepository│ │ CachedRepository  │
//! │ (file, fresh │ │  (in-memory)  │ │ (wraps any other, │
//! │  per load)   │ │               │ │  explicit reset)  │
//! └──────────────┘ └───────────────┘ └───────────────────┘
//! ```
//!
//! # Usage
//! ```no_run
//! use kepler_explorer::config::AppConfig;
//! use kepler_explorer::db::RepositoryFactory;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let repo = RepositoryFactory::from_config(&config)?;
//!     let planets = repo.load_planets().await?;
//!     println!("{} planets", planets.len());
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod checksum;
pub mod factory;
pub mod repositories;
pub mod repository;

pub use cache::{CacheStatus, CachedRepository};
pub use checksum::{calculate_checksum, calculate_planets_checksum};
pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::{CsvRepository, LocalRepository};
pub use repository::{
    CatalogRepository, ErrorContext, RepositoryError, RepositoryResult,
};
