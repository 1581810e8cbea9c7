//! Classification, scoring and aggregation over KOI records.
//!
//! Everything here is pure and evaluated per record (aggregation aside), so
//! results never depend on how a collection is batched.

pub mod aggregation;
pub mod classification;
pub mod scoring;

pub use aggregation::group_by_disposition;
pub use classification::{
    is_earth_like, is_habitable_strict, is_habitable_ui, receives_earth_like_sunlight,
};
pub use scoring::{score, score_all, score_breakdown, MAX_SCORE};
