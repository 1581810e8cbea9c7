//! Service layer for business logic and orchestration.
//!
//! Each `get_*` function loads the full collection from a repository and
//! recomputes its result from scratch; the matching `compute_*`/pure helpers
//! take already-loaded records.

pub mod catalog;
pub mod charts;
pub mod explorer;
pub mod habitability;


pub use catalog::list_planets;
pub use charts::{compute_chart_data, get_chart_data};
pub use explorer::{explore, get_explorer_data};
pub use habitability::{
    check_habitability, compute_habitability_data, evaluate_planet, get_habitability_check,
    get_habitability_data,
};
