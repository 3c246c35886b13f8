//! Combat resolution.
//!
//! Fights are decided in full before any effect is applied, with no
//! randomness: the same player stats against the same enemy always yield
//! the same [`CombatOutcome`].
//!
//! # Formula
//!
//! ```text
//! player_damage = player.atk - enemy.def          (unwinnable if <= 0)
//! enemy_damage  = max(enemy.atk - player.def, 0)
//! rounds        = ceil(enemy.hp / player_damage)
//! damage_taken  = (rounds - 1) * enemy_damage     (player strikes first)
//! victory       = damage_taken < player.hp
//! ```
//!
//! Unset enemy stats count as zero.

use crate::state::{Enemy, PlayerStats};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatOutcome {
    /// The player wins and loses `damage_taken` hit points.
    Victory { damage_taken: i32 },
    /// The player cannot win; the move is blocked.
    Defeat,
}

impl CombatOutcome {
    pub const fn is_victory(&self) -> bool {
        matches!(self, CombatOutcome::Victory { .. })
    }
}

/// Decides the fight between `player` and `enemy`.
pub fn resolve_combat(player: &PlayerStats, enemy: &Enemy) -> CombatOutcome {
    let enemy_hp = i64::from(enemy.hp.unwrap_or(0).max(0));
    let enemy_atk = i64::from(enemy.atk.unwrap_or(0));
    let enemy_def = i64::from(enemy.def.unwrap_or(0));

    let player_damage = i64::from(player.atk) - enemy_def;
    if player_damage <= 0 {
        return CombatOutcome::Defeat;
    }
    let enemy_damage = (enemy_atk - i64::from(player.def)).max(0);

    let rounds = (enemy_hp + player_damage - 1) / player_damage;
    let damage_taken = (rounds - 1).max(0) * enemy_damage;

    if damage_taken < i64::from(player.hp) {
        CombatOutcome::Victory {
            // Bounded by player.hp, so it fits.
            damage_taken: damage_taken as i32,
        }
    } else {
        CombatOutcome::Defeat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EnemyType;

    fn enemy(hp: i32, atk: i32, def: i32) -> Enemy {
        Enemy::new(EnemyType::Fighter, 1, "test").with_stats(hp, atk, def, 5)
    }

    #[test]
    fn weak_enemy_is_beaten_with_damage() {
        let player = PlayerStats::new(100, 10, 2);
        // 3 rounds, enemy hits twice for 4.
        assert_eq!(
            resolve_combat(&player, &enemy(25, 6, 0)),
            CombatOutcome::Victory { damage_taken: 8 }
        );
    }

    #[test]
    fn enemy_defense_at_or_above_attack_blocks() {
        let player = PlayerStats::new(1000, 10, 10);
        assert_eq!(resolve_combat(&player, &enemy(1, 0, 10)), CombatOutcome::Defeat);
    }

    #[test]
    fn lethal_fight_is_a_defeat() {
        let player = PlayerStats::new(10, 5, 0);
        // 4 rounds, enemy hits three times for 5 = 15 >= 10.
        assert_eq!(resolve_combat(&player, &enemy(20, 5, 0)), CombatOutcome::Defeat);
    }

    #[test]
    fn damage_exactly_equal_to_hp_is_a_defeat() {
        let player = PlayerStats::new(10, 5, 0);
        // 3 rounds, two hits of 5.
        assert_eq!(resolve_combat(&player, &enemy(15, 5, 0)), CombatOutcome::Defeat);
    }

    #[test]
    fn unauthored_enemy_falls_immediately() {
        let player = PlayerStats::new(1, 1, 0);
        let outcome = resolve_combat(&player, &Enemy::default());
        assert_eq!(outcome, CombatOutcome::Victory { damage_taken: 0 });
    }

    #[test]
    fn outcome_is_deterministic() {
        let player = PlayerStats::new(50, 8, 3);
        let foe = enemy(40, 9, 2);
        assert_eq!(resolve_combat(&player, &foe), resolve_combat(&player, &foe));
    }
}
