//! Read-only data the engine consults while resolving moves.
//!
//! [`GameTables`] holds the static drop and item tables; [`GameConfig`]
//! carries tunable rules. [`GameEnv`] bundles references to both so the
//! engine and the reachability calculator never reach for global state.
mod tables;

pub use tables::{DropContent, DropTable, GameTables, ItemEffect, standard_item_effect};

use crate::config::GameConfig;

/// Aggregates the read-only inputs required by the engine.
#[derive(Clone, Copy, Debug)]
pub struct GameEnv<'a> {
    tables: &'a GameTables,
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(tables: &'a GameTables, config: &'a GameConfig) -> Self {
        Self { tables, config }
    }

    /// Environment backed by the process-wide standard tables.
    pub fn standard(config: &'a GameConfig) -> Self {
        Self::new(GameTables::shared(), config)
    }

    pub fn tables(&self) -> &'a GameTables {
        self.tables
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }
}
