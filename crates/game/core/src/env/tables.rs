use std::collections::HashMap;
use std::sync::LazyLock;

use strum::IntoEnumIterator;

use crate::data::{Color, ItemName};
use crate::state::Tile;

/// What a named enemy drop turns into once the enemy is defeated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DropContent {
    Key(Color),
    Item(ItemName),
}

impl DropContent {
    /// Tile placed where the defeated enemy stood.
    pub fn tile(self) -> Tile {
        match self {
            DropContent::Key(color) => Tile::Key { color },
            DropContent::Item(name) => Tile::Item { name },
        }
    }
}

/// Name → content mapping for enemy drops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropTable {
    entries: HashMap<String, DropContent>,
}

impl DropTable {
    pub fn new(entries: HashMap<String, DropContent>) -> Self {
        Self { entries }
    }

    /// Every item by display name plus one key drop per color.
    pub fn standard() -> Self {
        let items = ItemName::iter().map(|name| (name.to_string(), DropContent::Item(name)));
        let keys = Color::iter().map(|color| {
            (
                color.key_drop_name().to_string(),
                DropContent::Key(color),
            )
        });
        Self {
            entries: items.chain(keys).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<DropContent> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stat changes applied when an item is picked up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemEffect {
    pub hp: i32,
    pub atk: i32,
    pub def: i32,
}

impl ItemEffect {
    pub const NONE: Self = Self::new(0, 0, 0);

    pub const fn new(hp: i32, atk: i32, def: i32) -> Self {
        Self { hp, atk, def }
    }

    pub const fn is_none(&self) -> bool {
        self.hp == 0 && self.atk == 0 && self.def == 0
    }
}

/// Pickup effect of each item in the standard tables.
///
/// Feathers, books, the crown and the dream-ocean drop are passive inventory
/// entries and change no stat on pickup.
pub const fn standard_item_effect(item: ItemName) -> ItemEffect {
    match item {
        ItemName::RedPotion => ItemEffect::new(50, 0, 0),
        ItemName::BluePotion => ItemEffect::new(200, 0, 0),
        ItemName::HeavenlyPotion => ItemEffect::new(400, 0, 0),
        ItemName::LifePotion => ItemEffect::new(1000, 0, 0),
        ItemName::PowerPiece => ItemEffect::new(0, 1, 0),
        ItemName::PowerGem => ItemEffect::new(0, 2, 0),
        ItemName::PowerPotion => ItemEffect::new(0, 3, 0),
        ItemName::PowerCard => ItemEffect::new(0, 5, 0),
        ItemName::PowerDeck => ItemEffect::new(0, 10, 0),
        ItemName::GuardPiece => ItemEffect::new(0, 0, 1),
        ItemName::GuardGem => ItemEffect::new(0, 0, 2),
        ItemName::GuardPotion => ItemEffect::new(0, 0, 3),
        ItemName::GuardCard => ItemEffect::new(0, 0, 5),
        ItemName::GuardDeck => ItemEffect::new(0, 0, 10),
        ItemName::DropOfDreamOcean
        | ItemName::GoldenFeather
        | ItemName::LifeCrown
        | ItemName::PulseBookShield
        | ItemName::PulseBookSword => ItemEffect::NONE,
    }
}

static SHARED_TABLES: LazyLock<GameTables> = LazyLock::new(GameTables::standard);

/// Immutable lookup tables consulted by the engine and the importer.
///
/// Built once per process through [`GameTables::shared`] and passed by
/// reference; nothing mutates it after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameTables {
    drops: DropTable,
    item_effects: HashMap<ItemName, ItemEffect>,
}

impl GameTables {
    pub fn new(drops: DropTable, item_effects: HashMap<ItemName, ItemEffect>) -> Self {
        Self {
            drops,
            item_effects,
        }
    }

    pub fn standard() -> Self {
        let item_effects = ItemName::iter()
            .map(|item| (item, standard_item_effect(item)))
            .filter(|(_, effect)| !effect.is_none())
            .collect();
        Self::new(DropTable::standard(), item_effects)
    }

    /// Process-wide standard tables.
    pub fn shared() -> &'static GameTables {
        &SHARED_TABLES
    }

    pub fn drops(&self) -> &DropTable {
        &self.drops
    }

    pub fn drop_content(&self, name: &str) -> Option<DropContent> {
        self.drops.get(name)
    }

    pub fn item_effect(&self, item: ItemName) -> ItemEffect {
        self.item_effects
            .get(&item)
            .copied()
            .unwrap_or(ItemEffect::NONE)
    }
}
