//! `pokedex_etl` downloads creature data from PokéAPI, derives a type-matchup
//! weakness profile for every entry, and exports the result as a JSON document
//! and a flat CSV table.
//!
//! The pipeline runs in two phases, each with its own binary:
//!
//! 1. `pokedex-fetch` loads the [`chart::TypeChart`], walks the id range with a
//!    [`record::Fetcher`] and writes every [`record::EntityRecord`] through
//!    [`document::write()`].
//! 2. `pokedex-flatten` reads that document back and writes one CSV row per
//!    record with [`flatten::flatten_file()`].

#![warn(missing_docs)]

pub mod api;
pub mod batch;
pub mod chart;
pub mod config;
pub mod document;
pub mod flatten;
pub mod logging;
pub mod model;
pub mod record;
pub mod weakness;

pub use api::Api;
pub use config::Config;
