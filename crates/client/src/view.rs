//! Plain-text rendering of the session for the terminal.
//!
//! Each cell is one character. Doors and enemies are drawn in lowercase when
//! the player could step onto them right now and in uppercase when they
//! block, so the reachability view reads at a glance.

use std::fmt::Write as _;

use strum::IntoEnumIterator;
use tower_core::{
    Action, Color, GameState, PlayerState, Position, Reachability, StaircaseDirection,
    TILES_IN_ROW, Tile,
};
use tower_runtime::{ActionEvent, Event, RoomEvent};

const PLAYER: char = '@';
const SCORE_OVERLAY: char = '+';

pub const LEGEND: &str = "@ you  # wall  d/D door  k key  i item  e/E enemy  < > stairs  * + score  (uppercase blocks)";

/// Glyph for `tile`; `enterable` picks the case of doors and enemies.
pub fn tile_glyph(tile: Tile, enterable: bool) -> char {
    let glyph = match tile {
        Tile::Empty => '.',
        Tile::Wall => '#',
        Tile::StartingPosition => 's',
        Tile::Door { .. } => 'd',
        Tile::Key { .. } => 'k',
        Tile::Item { .. } => 'i',
        Tile::Enemy { .. } => 'e',
        Tile::Staircase {
            direction: StaircaseDirection::Up,
        } => '<',
        Tile::Staircase {
            direction: StaircaseDirection::Down,
        } => '>',
        Tile::Score { .. } => '*',
    };
    if enterable {
        glyph
    } else {
        glyph.to_ascii_uppercase()
    }
}

/// Draws the player's room as a header line plus one line per grid row.
pub fn render_room(state: &GameState, reachability: &Reachability) -> String {
    let location = state.player.location;
    let Some(room) = state.current_room() else {
        return format!("(player is outside the tower at {location})\n");
    };
    let fresh = reachability.room() == location.room;

    let mut out = format!("{} (room {})\n", room.name, location.room);
    for line in 0..TILES_IN_ROW as i32 {
        for column in 0..TILES_IN_ROW as i32 {
            let position = Position::new(line, column);
            let tile = room.tile(position).unwrap_or_default();
            let glyph = if position == location.position() {
                PLAYER
            } else if tile.is_empty() && room.score_at(position).is_some() {
                SCORE_OVERLAY
            } else {
                tile_glyph(tile, !fresh || reachability.is_reachable(position))
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// Attributes, keys and items on three lines.
pub fn render_status(player: &PlayerState) -> String {
    let stats = &player.stats;
    let mut out = format!(
        "hp {}  atk {}  def {}  exp {}\n",
        stats.hp, stats.atk, stats.def, stats.exp
    );

    let keys: Vec<String> = Color::iter()
        .filter(|color| stats.keys.has(*color))
        .map(|color| format!("{color} x{}", stats.keys.count(color)))
        .collect();
    let _ = writeln!(out, "keys: {}", list_or_none(&keys));

    let items: Vec<String> = stats
        .items
        .iter()
        .map(|(item, count)| format!("{item} x{count}"))
        .collect();
    let _ = writeln!(out, "items: {}", list_or_none(&items));
    out
}

fn list_or_none(entries: &[String]) -> String {
    if entries.is_empty() {
        "none".to_owned()
    } else {
        entries.join(", ")
    }
}

pub fn describe_action(action: &Action) -> String {
    match *action {
        Action::PlayerMove { target, .. } => format!("moved to {target}"),
        Action::PickKey { color, .. } => format!("picked up a {color} key"),
        Action::PickItem { item, .. } => format!("picked up {item}"),
        Action::OpenDoor { color, .. } => format!("opened the {color} door"),
        Action::KillEnemy {
            enemy,
            damage_taken,
            drop_tile,
            ..
        } => {
            let mut text = format!("defeated enemy {enemy}, taking {damage_taken} damage");
            match drop_tile {
                Tile::Key { color } => {
                    let _ = write!(text, "; it dropped a {color} key");
                }
                Tile::Item { name } => {
                    let _ = write!(text, "; it dropped {name}");
                }
                _ => {}
            }
            text
        }
        Action::TakeStaircase {
            direction, target, ..
        } => format!("took the {direction} staircase to {target}"),
    }
}

pub fn describe_event(event: &Event) -> String {
    match event {
        Event::Action(ActionEvent::ActionResolved { action }) => describe_action(action),
        Event::Action(ActionEvent::MoveRejected {
            direction,
            location,
            discarded,
        }) => {
            let mut text = format!("cannot move {direction} from {location}");
            if *discarded > 0 {
                let _ = write!(text, " ({discarded} queued moves dropped)");
            }
            text
        }
        Event::Room(RoomEvent::RoomChanged { from, to }) => {
            format!("left room {from} for room {to}")
        }
    }
}
