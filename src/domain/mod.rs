//! Domain layer: grid layout and its invariants
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod grid;
pub mod paths;

pub use error::DomainError;
pub use grid::{
    Belt, Cell, Entity, GridLayout, GridSize, GridSummary, Node, NodeKind, Point, DEFAULT_SIZE,
    FILE_EXTENSION, FORMAT_VERSION, GRID_UNIT, PORT_OFFSET,
};
pub use paths::expand_env_vars;
