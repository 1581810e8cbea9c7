//! Filtering and paging over loaded planet collections.
//!
//! # Modules
//!
//! - [`filtering`]: range, text and disposition predicates and their composition
//! - [`pagination`]: page slicing for the explorer views
//!
//! # Example
//!
//! ```
//! use kepler_explorer::models::{Disposition, PlanetRecord};
//! use kepler_explorer::transformations::{paginate, PlanetFilter, Range};
//!
//! let planets = vec![
//!     PlanetRecord::new("K00001.01").with_radius(1.1).with_disposition(Disposition::Confirmed),
//!     PlanetRecord::new("K00002.01").with_radius(9.0),
//! ];
//! let filter = PlanetFilter::new().with_radius(Range::new("radius", 0.5, 2.0).unwrap());
//! let page = paginate(&filter.apply(&planets), 1, 100);
//! assert_eq!(page.total_items, 1);
//! ```

pub mod filtering;
pub mod pagination;

pub use filtering::{matches_exact, matches_range, matches_text, FilterError, PlanetFilter, Range};
pub use pagination::{paginate, total_pages, Page, DEFAULT_GRID_BATCH, DEFAULT_PAGE_SIZE};
