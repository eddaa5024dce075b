//! gridgen: generate grids of mergers and splitters joined by belts
//!
//! The output is a `.satisfied` scene used as a synthetic load-test input.
//! Layers, innermost first: `domain` (pure layout), `application` (generation
//! service), `infrastructure` (filesystem, wiring), `cli`.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
