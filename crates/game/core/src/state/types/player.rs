//! Player position, inventory and combat attributes.

use std::collections::BTreeMap;

use strum::EnumCount;

use crate::data::{Color, ItemName};
use crate::env::ItemEffect;

use super::{Location, StartingStats};

/// Keys held, counted per color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyRing {
    counts: [u32; <Color as EnumCount>::COUNT],
}

impl KeyRing {
    pub fn count(&self, color: Color) -> u32 {
        self.counts[color.index()]
    }

    pub fn has(&self, color: Color) -> bool {
        self.count(color) > 0
    }

    pub fn add(&mut self, color: Color) {
        self.counts[color.index()] = self.counts[color.index()].saturating_add(1);
    }

    /// Removes one key of `color`. Returns false when none was held.
    pub fn remove(&mut self, color: Color) -> bool {
        let slot = &mut self.counts[color.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

/// Items held, counted per name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: BTreeMap<ItemName, u32>,
}

impl Inventory {
    pub fn count(&self, item: ItemName) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: ItemName) -> bool {
        self.count(item) > 0
    }

    pub fn add(&mut self, item: ItemName) {
        let count = self.items.entry(item).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemName, u32)> + '_ {
        self.items.iter().map(|(item, count)| (*item, *count))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    pub hp: i32,
    pub atk: i32,
    pub def: i32,
    pub exp: i32,
    pub keys: KeyRing,
    pub items: Inventory,
}

impl PlayerStats {
    pub fn new(hp: i32, atk: i32, def: i32) -> Self {
        Self {
            hp,
            atk,
            def,
            ..Self::default()
        }
    }

    /// Unset starting stats count as zero.
    pub fn from_starting(stats: &StartingStats) -> Self {
        Self::new(
            stats.hp.unwrap_or(0),
            stats.atk.unwrap_or(0),
            stats.def.unwrap_or(0),
        )
    }

    pub fn apply_effect(&mut self, effect: ItemEffect) {
        self.hp = self.hp.saturating_add(effect.hp);
        self.atk = self.atk.saturating_add(effect.atk);
        self.def = self.def.saturating_add(effect.def);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub location: Location,
    pub stats: PlayerStats,
}

impl PlayerState {
    pub fn new(location: Location, stats: PlayerStats) -> Self {
        Self { location, stats }
    }
}
