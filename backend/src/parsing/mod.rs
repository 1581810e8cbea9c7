//! Loader for the Kepler cumulative KOI table.
//!
//! # Example
//!
//! ```no_run
//! use kepler_explorer::parsing::csv_parser::parse_planets_csv;
//! use std::path::Path;
//!
//! let planets = parse_planets_csv(Path::new("data/kepler_data.csv"))
//!     .expect("Failed to parse planet data");
//! ```

pub mod csv_parser;


pub use csv_parser::{parse_planets_csv, parse_planets_csv_str, parse_planets_reader};
