//! Enumerated static data: colors, item names, enemy kinds, staircase
//! directions and score markers.
//!
//! The string forms produced by `Display`/`AsRefStr` and accepted by
//! `FromStr` are the exact values used in persisted tower records.

/// Color shared by doors and the keys that open them.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum Color {
    Blue,
    Crimson,
    GreenBlue,
    Platinum,
    Violet,
    Yellow,
}

impl Color {
    /// Dense index used by per-color counters.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name of the enemy drop that yields a key of this color.
    pub const fn key_drop_name(self) -> &'static str {
        match self {
            Color::Blue => "Blue key",
            Color::Crimson => "Crimson key",
            Color::GreenBlue => "Green-blue key",
            Color::Platinum => "Platinum key",
            Color::Violet => "Violet key",
            Color::Yellow => "Yellow key",
        }
    }
}

/// Every collectible item. The persisted form is the display name.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum ItemName {
    #[strum(serialize = "Blue potion")]
    BluePotion,
    #[strum(serialize = "Drop of dream ocean")]
    DropOfDreamOcean,
    #[strum(serialize = "Golden feather")]
    GoldenFeather,
    #[strum(serialize = "Guard card")]
    GuardCard,
    #[strum(serialize = "Guard deck")]
    GuardDeck,
    #[strum(serialize = "Guard gem")]
    GuardGem,
    #[strum(serialize = "Guard piece")]
    GuardPiece,
    #[strum(serialize = "Guard potion")]
    GuardPotion,
    #[strum(serialize = "Heavenly potion")]
    HeavenlyPotion,
    #[strum(serialize = "Life Crown")]
    LifeCrown,
    #[strum(serialize = "Life potion")]
    LifePotion,
    #[strum(serialize = "Power card")]
    PowerCard,
    #[strum(serialize = "Power deck")]
    PowerDeck,
    #[strum(serialize = "Power gem")]
    PowerGem,
    #[strum(serialize = "Power piece")]
    PowerPiece,
    #[strum(serialize = "Power potion")]
    PowerPotion,
    #[strum(serialize = "Pulse book <Shield>")]
    PulseBookShield,
    #[strum(serialize = "Pulse book <Sword>")]
    PulseBookSword,
    #[strum(serialize = "Red potion")]
    RedPotion,
}

#[cfg(feature = "serde")]
impl serde::Serialize for ItemName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ItemName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameVisitor;

        impl serde::de::Visitor<'_> for NameVisitor {
            type Value = ItemName;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("an item display name")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<ItemName, E> {
                value
                    .parse()
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}

/// Enemy archetype. Enemies whose type was never authored carry `None`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum EnemyType {
    Burgeoner,
    Fighter,
    Ranger,
    Shadow,
    Slasher,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum StaircaseDirection {
    Up,
    Down,
}

impl StaircaseDirection {
    /// Direction of the staircase that pairs with this one in the linked room.
    pub const fn opposite(self) -> Self {
        match self {
            StaircaseDirection::Up => StaircaseDirection::Down,
            StaircaseDirection::Down => StaircaseDirection::Up,
        }
    }
}

/// Score marker shown as an overlay on a room cell.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum ScoreType {
    Check,
    Crown,
    Star,
}
