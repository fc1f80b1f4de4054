use serde::{Deserialize, Serialize};

use crate::constants::HARD_MONSTER_STAT_MULT;

/// Battle difficulty. Hard scales monster damage, defense, and dodge chance
/// once when the battle is constructed; templates are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Normal,
    Hard,
}

impl Difficulty {
    pub fn monster_stat_mult(&self) -> f64 {
        match self {
            Difficulty::Normal => 1.0,
            Difficulty::Hard => HARD_MONSTER_STAT_MULT,
        }
    }
}

/// How a battle ended. `Abandoned` is the quit-sentinel path: the player
/// left mid-battle and the calling loop decides what that means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Abandoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_mult() {
        assert_eq!(Difficulty::Normal.monster_stat_mult(), 1.0);
        assert_eq!(Difficulty::Hard.monster_stat_mult(), 1.2);
    }
}
