use std::fmt;

use crate::config::TILES_IN_ROW;

/// Index of an enemy in the tower roster. Enemy tiles hold this reference,
/// never a copy of the enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyId(pub u32);

impl EnemyId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Cell coordinates inside a room. Signed so that a step off the grid is
/// representable and can be rejected by [`Position::in_bounds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: i32,
    pub column: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { line: 0, column: 0 };

    pub const fn new(line: i32, column: i32) -> Self {
        Self { line, column }
    }

    pub fn offset(self, (delta_line, delta_column): (i32, i32)) -> Self {
        Self::new(self.line + delta_line, self.column + delta_column)
    }

    pub fn in_bounds(self) -> bool {
        self.grid_index().is_some()
    }

    /// Returns `(line, column)` as grid indices when inside `[0, TILES_IN_ROW)`.
    pub fn grid_index(self) -> Option<(usize, usize)> {
        let line = usize::try_from(self.line).ok()?;
        let column = usize::try_from(self.column).ok()?;
        (line < TILES_IN_ROW && column < TILES_IN_ROW).then_some((line, column))
    }

    /// Every in-room position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..TILES_IN_ROW as i32)
            .flat_map(|line| (0..TILES_IN_ROW as i32).map(move |column| Position::new(line, column)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.line, self.column)
    }
}

/// Position of the player across the whole tower: standard room index plus
/// cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub room: usize,
    pub line: i32,
    pub column: i32,
}

impl Location {
    pub const fn new(room: usize, line: i32, column: i32) -> Self {
        Self { room, line, column }
    }

    pub const fn at(room: usize, position: Position) -> Self {
        Self::new(room, position.line, position.column)
    }

    pub const fn position(self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room {} [{}, {}]", self.room, self.line, self.column)
    }
}
