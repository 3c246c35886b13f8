//! Move resolution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! move runs through two phases: `plan` inspects the destination tile and
//! decides the [`Action`] without touching the state, then `apply` commits
//! it. A rejected move never reaches the apply phase, so a blocked request
//! leaves the state exactly as it was.

mod errors;
mod transition;

pub use errors::EngineError;

use crate::action::{Action, Direction};
use crate::env::GameEnv;
use crate::state::GameState;

/// Game engine borrowing the state it mutates.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Resolves one step in `direction`.
    ///
    /// Returns `Ok(Some(action))` once the action has been committed and
    /// `Ok(None)` for a blocked move (wall, locked door, unwinnable fight,
    /// grid edge). `Err` is reserved for content or state integrity faults.
    pub fn resolve_move(
        &mut self,
        env: GameEnv<'_>,
        direction: Direction,
    ) -> Result<Option<Action>, EngineError> {
        let Some(action) = transition::plan(self.state, &env, direction)? else {
            return Ok(None);
        };
        transition::apply(self.state, &env, &action)?;
        Ok(Some(action))
    }

    /// Plans a step without committing it.
    pub fn preview(
        &self,
        env: GameEnv<'_>,
        direction: Direction,
    ) -> Result<Option<Action>, EngineError> {
        Self::plan(self.state, env, direction)
    }

    /// Read-only planning over a borrowed state, for callers that hold no
    /// mutable access.
    pub fn plan(
        state: &GameState,
        env: GameEnv<'_>,
        direction: Direction,
    ) -> Result<Option<Action>, EngineError> {
        transition::plan(state, &env, direction)
    }

    pub fn state(&self) -> &GameState {
        self.state
    }
}
