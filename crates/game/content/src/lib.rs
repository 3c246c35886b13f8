//! Tower content: the persisted record format and file loaders.
//!
//! - [`io`]: import/export between JSON tower records and
//!   [`tower_core::Tower`], with accumulated, human-readable errors
//! - `loaders`: file access for tower records and the TOML game
//!   configuration
//!
//! Nothing here mutates a tower during play; content is produced once and
//! handed to the runtime.

pub mod io;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use io::{ImportResult, export_tower, export_tower_string, import_tower};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, TowerLoader};
