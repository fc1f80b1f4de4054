//! Pure damage and dodge math.
//!
//! The two sides dodge differently on purpose: monsters roll a continuous
//! probability shaved down by the attacker's dexterity, heroes compare an
//! integer roll in 0..100 against a tiny agility-scaled threshold. Combat
//! balance was tuned around the asymmetry.

use rand::Rng;

use crate::character::Hero;
use crate::constants::*;
use crate::monsters::Monster;

/// Defense-mitigated damage: `(attack * 0.05) * (attack / (attack + defense))`,
/// floored at 1, truncated. Zero attack against zero defense deals nothing.
pub fn mitigated_damage(attack: f64, defense: f64) -> u32 {
    if attack + defense == 0.0 {
        return 0;
    }
    let damage = (attack * DAMAGE_SCALE_FACTOR) * (attack / (attack + defense));
    damage.max(1.0) as u32
}

/// Strength plus main-hand weapon damage. A one-handed weapon held in a
/// two-handed grip hits half again as hard. The off-hand never contributes
/// to this rating.
pub fn hero_attack_rating(hero: &Hero) -> f64 {
    let mut attack = hero.strength as f64;
    if let Some(main) = &hero.main_hand {
        let mut weapon_damage = main.damage as f64;
        if hero.two_handed_grip && !main.is_two_handed() {
            weapon_damage *= TWO_HANDED_GRIP_DAMAGE_MULT;
        }
        attack += weapon_damage;
    }
    attack
}

/// The monster's dodge probability against this hero, clamped at 0.
pub fn effective_monster_dodge(dodge_chance: u32, dexterity: u32) -> f64 {
    let raw = dodge_chance as f64 * MONSTER_DODGE_FACTOR
        - dexterity as f64 * DEXTERITY_DODGE_REDUCTION_FACTOR;
    raw.max(0.0)
}

pub fn monster_dodges(monster: &Monster, hero: &Hero, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < effective_monster_dodge(monster.dodge_chance, hero.dexterity)
}

/// Integer roll in 0..100 against an agility-scaled threshold.
pub fn hero_dodges(hero: &Hero, rng: &mut impl Rng) -> bool {
    (rng.gen_range(0..100) as f64) < hero.agility as f64 * HERO_DODGE_AGILITY_FACTOR
}

/// Spell damage scales with caster dexterity and ignores defense entirely.
pub fn spell_damage(base: u32, dexterity: u32) -> u32 {
    (base as f64 + dexterity as f64 / SPELL_DEXTERITY_SCALING_DIVISOR * base as f64) as u32
}
