//! Move planning and commit logic.

use crate::action::{Action, Direction};
use crate::combat::{CombatOutcome, resolve_combat};
use crate::env::{GameEnv, GameTables};
use crate::state::{Enemy, EnemyId, GameState, Location, Tile};

use super::errors::EngineError;

/// Decides which action, if any, a step in `direction` produces.
///
/// Reads the state only. `Ok(None)` means the move is rejected.
pub(super) fn plan(
    state: &GameState,
    env: &GameEnv<'_>,
    direction: Direction,
) -> Result<Option<Action>, EngineError> {
    let player = state.player.location;
    let room = state
        .current_room()
        .ok_or(EngineError::PlayerOutsideRoom { location: player })?;

    let destination = player.position().offset(direction.delta());
    // Leaving the grid is never a transition; only staircases change rooms.
    let Some(tile) = room.tile(destination) else {
        return Ok(None);
    };
    let target = Location::at(player.room, destination);

    let action = match tile {
        Tile::Empty | Tile::StartingPosition | Tile::Score { .. } => {
            Some(Action::PlayerMove { player, target })
        }
        Tile::Wall => None,
        Tile::Key { color } => Some(Action::PickKey {
            player,
            target,
            color,
        }),
        Tile::Item { name } => Some(Action::PickItem {
            player,
            target,
            item: name,
        }),
        Tile::Door { color } => state
            .player
            .stats
            .keys
            .has(color)
            .then_some(Action::OpenDoor {
                player,
                target,
                color,
            }),
        Tile::Enemy { enemy: id } => {
            let enemy = state
                .tower
                .enemy(id)
                .ok_or(EngineError::MissingEnemy {
                    enemy: id,
                    location: target,
                })?;
            match resolve_combat(&state.player.stats, enemy) {
                CombatOutcome::Victory { damage_taken } => Some(Action::KillEnemy {
                    player,
                    target,
                    enemy: id,
                    damage_taken,
                    drop_tile: drop_tile(id, enemy, env.tables())?,
                }),
                CombatOutcome::Defeat => None,
            }
        }
        Tile::Staircase { direction: stairs } => {
            let unpaired = EngineError::UnpairedStaircase {
                direction: stairs,
                location: target,
            };
            let linked = state
                .tower
                .linked_room(player.room, stairs)
                .ok_or_else(|| unpaired.clone())?;
            let landing = state
                .tower
                .find_staircase(linked, stairs.opposite())
                .ok_or(unpaired)?;
            Some(Action::TakeStaircase {
                player,
                target: Location::at(linked, landing),
                direction: stairs,
            })
        }
    };

    Ok(action)
}

/// Tile left behind by a defeated enemy.
///
/// No drop leaves [`Tile::Empty`]; a drop name missing from the table is a
/// content fault.
fn drop_tile(id: EnemyId, enemy: &Enemy, tables: &GameTables) -> Result<Tile, EngineError> {
    let Some(name) = enemy.drop.as_deref() else {
        return Ok(Tile::Empty);
    };
    tables
        .drop_content(name)
        .map(|content| content.tile())
        .ok_or_else(|| EngineError::UnknownDrop {
            enemy: id,
            name: name.to_owned(),
        })
}

/// Commits a planned action to the state.
pub(super) fn apply(
    state: &mut GameState,
    env: &GameEnv<'_>,
    action: &Action,
) -> Result<(), EngineError> {
    let target = action.target();
    let stale = || EngineError::StaleAction { location: target };

    match *action {
        Action::PlayerMove { .. } => {}
        Action::PickKey { color, .. } => {
            take_tile(state, target, Tile::Key { color }, Tile::Empty).ok_or_else(stale)?;
            state.player.stats.keys.add(color);
        }
        Action::PickItem { item, .. } => {
            take_tile(state, target, Tile::Item { name: item }, Tile::Empty)
                .ok_or_else(stale)?;
            let stats = &mut state.player.stats;
            stats.items.add(item);
            stats.apply_effect(env.tables().item_effect(item));
        }
        Action::OpenDoor { color, .. } => {
            if !state.player.stats.keys.has(color) {
                return Err(stale());
            }
            take_tile(state, target, Tile::Door { color }, Tile::Empty).ok_or_else(stale)?;
            if env.config().door_consumes_key {
                state.player.stats.keys.remove(color);
            }
        }
        Action::KillEnemy {
            enemy,
            damage_taken,
            drop_tile,
            ..
        } => {
            let exp = state
                .tower
                .enemy(enemy)
                .and_then(|enemy| enemy.exp)
                .unwrap_or(0);
            take_tile(state, target, Tile::Enemy { enemy }, drop_tile).ok_or_else(stale)?;
            let stats = &mut state.player.stats;
            stats.hp = stats.hp.saturating_sub(damage_taken);
            stats.exp = stats.exp.saturating_add(exp);
        }
        Action::TakeStaircase { direction, .. } => {
            // The landing staircase must still be in place.
            if state.tile_at(target) != Some(Tile::Staircase {
                direction: direction.opposite(),
            }) {
                return Err(stale());
            }
        }
    }

    state.player.location = target;
    Ok(())
}

/// Swaps `expected` at `location` for `replacement`. Returns `None` when the
/// tile there is something else.
fn take_tile(
    state: &mut GameState,
    location: Location,
    expected: Tile,
    replacement: Tile,
) -> Option<()> {
    let room = state.tower.standard_rooms.get_mut(location.room)?;
    let position = location.position();
    if room.tile(position)? != expected {
        return None;
    }
    room.set_tile(position, replacement).then_some(())
}
