// Board generation
pub const MIN_BOARD_DIM: usize = 4;
pub const MAX_BOARD_DIM: usize = 20;
// Tile draw thresholds out of 100: roll < 20 inaccessible, < 50 market, else common
pub const TILE_INACCESSIBLE_THRESHOLD: u32 = 20;
pub const TILE_MARKET_THRESHOLD: u32 = 50;

// Damage model
pub const DAMAGE_SCALE_FACTOR: f64 = 0.05;
pub const TWO_HANDED_GRIP_DAMAGE_MULT: f64 = 1.5;

// Dodge model. Monster dodge is a percent-scale stat shaved down by hero
// dexterity; hero dodge uses agility against an integer roll in 0..100.
pub const MONSTER_DODGE_FACTOR: f64 = 0.01;
pub const DEXTERITY_DODGE_REDUCTION_FACTOR: f64 = 0.00025;
pub const HERO_DODGE_AGILITY_FACTOR: f64 = 0.01;

// Spells
pub const SPELL_DEXTERITY_SCALING_DIVISOR: f64 = 10000.0;
pub const SPELL_DEBUFF_FRACTION: f64 = 0.1;

// Per-round regeneration (additive, uncapped)
pub const HP_PER_LEVEL: u32 = 100;
pub const HP_REGEN_FRACTION: f64 = 0.1;
pub const MANA_REGEN_FRACTION: f64 = 0.1;

// Leveling
pub const XP_THRESHOLD_PER_LEVEL: u32 = 10;
pub const FAVORED_STAT_GROWTH: f64 = 1.1;
pub const OFF_STAT_GROWTH: f64 = 1.05;
pub const MANA_GROWTH: f64 = 1.1;

// Battle rewards
pub const REWARD_XP_FACTOR: u32 = 2;
pub const REWARD_GOLD_FACTOR: u32 = 100;
pub const REVIVE_HP_PER_LEVEL: u32 = 50;
pub const HARD_LOSS_GOLD_PER_LEVEL: u32 = 100;

// Difficulty
pub const HARD_MONSTER_STAT_MULT: f64 = 1.2;

// Monster kind multipliers, applied once when templates are built
pub const SPIRIT_DODGE_MULT: f64 = 1.1;
pub const DRAGON_DAMAGE_MULT: f64 = 1.1;
pub const EXOSKELETON_DEFENSE_MULT: f64 = 1.1;

// Party
pub const MAX_PARTY_SIZE: usize = 3;
