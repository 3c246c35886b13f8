/// Number of tiles along each edge of a room. Rooms are always square.
pub const TILES_IN_ROW: usize = 11;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Whether opening a door removes one key of the door's color from the
    /// player's key ring. When false a single key opens every door of its color.
    pub door_consumes_key: bool,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DOOR_CONSUMES_KEY: bool = true;

    pub fn new() -> Self {
        Self {
            door_consumes_key: Self::DEFAULT_DOOR_CONSUMES_KEY,
        }
    }

    pub fn with_door_consumes_key(door_consumes_key: bool) -> Self {
        Self { door_consumes_key }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
