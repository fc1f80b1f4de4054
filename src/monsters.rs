//! Monsters: kinds, templates, and battle-group instantiation.
//!
//! The master roster holds template monsters built once from content
//! records; battles clone level-matched templates and never touch the
//! roster itself.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::content::MonsterRecord;
use crate::entity::{BoardEntity, EntityId, Position};

/// Monster archetypes. Kind only scales base stats when a template is
/// built; there is no behavioral branching afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterKind {
    /// Elevated dodge chance.
    Spirit,
    /// Elevated damage.
    Dragon,
    /// Elevated defense.
    Exoskeleton,
}

impl MonsterKind {
    pub fn name(&self) -> &'static str {
        match self {
            MonsterKind::Spirit => "Spirit",
            MonsterKind::Dragon => "Dragon",
            MonsterKind::Exoskeleton => "Exoskeleton",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub id: EntityId,
    pub name: String,
    pub kind: MonsterKind,
    pub level: u32,
    pub hp: u32,
    pub damage: u32,
    pub defense: u32,
    /// Integer percent-like scale (e.g. 35 for a 35% base dodge).
    pub dodge_chance: u32,
    pub position: Option<Position>,
}

impl Monster {
    /// Builds a template from a content record, applying the kind multiplier
    /// exactly once.
    pub fn from_record(record: &MonsterRecord) -> Self {
        let (damage, defense, dodge_chance) = match record.kind {
            MonsterKind::Spirit => (
                record.damage,
                record.defense,
                (record.dodge_chance as f64 * SPIRIT_DODGE_MULT) as u32,
            ),
            MonsterKind::Dragon => (
                (record.damage as f64 * DRAGON_DAMAGE_MULT) as u32,
                record.defense,
                record.dodge_chance,
            ),
            MonsterKind::Exoskeleton => (
                record.damage,
                (record.defense as f64 * EXOSKELETON_DEFENSE_MULT) as u32,
                record.dodge_chance,
            ),
        };
        Self {
            id: EntityId::next(),
            name: record.name.clone(),
            kind: record.kind,
            level: record.level,
            hp: record.level * HP_PER_LEVEL,
            damage,
            defense,
            dodge_chance,
            position: None,
        }
    }

    /// Battle-scoped copy of a template: fresh identity, full HP, same stats.
    pub fn instantiate(&self) -> Self {
        Self {
            id: EntityId::next(),
            hp: self.level * HP_PER_LEVEL,
            position: None,
            ..self.clone()
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Shaves a tenth off one stat. Which stat depends on the spell family
    /// that hit this monster.
    pub fn reduce_damage_by_tenth(&mut self) -> u32 {
        let reduction = (self.damage as f64 * SPELL_DEBUFF_FRACTION) as u32;
        self.damage -= reduction;
        reduction
    }

    pub fn reduce_defense_by_tenth(&mut self) -> u32 {
        let reduction = (self.defense as f64 * SPELL_DEBUFF_FRACTION) as u32;
        self.defense -= reduction;
        reduction
    }

    pub fn reduce_dodge_by_tenth(&mut self) -> u32 {
        let reduction = (self.dodge_chance as f64 * SPELL_DEBUFF_FRACTION) as u32;
        self.dodge_chance -= reduction;
        reduction
    }

    /// One-line battle summary.
    pub fn status_line(&self) -> String {
        format!(
            "{} (Lvl {}) HP:{} Dmg:{} Def:{}",
            self.name, self.level, self.hp, self.damage, self.defense
        )
    }
}

impl BoardEntity for Monster {
    fn id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> Option<Position> {
        self.position
    }

    fn set_position(&mut self, pos: Position) {
        self.position = Some(pos);
    }
}

/// Builds the master roster of templates from content records.
pub fn build_roster(records: &[MonsterRecord]) -> Vec<Monster> {
    records.iter().map(Monster::from_record).collect()
}

/// Instantiates a battle group from the roster: one monster per party
/// member, drawn from templates matching the party's max level exactly, or
/// from lower-level templates if no exact match exists. Returns an empty
/// group when the roster has nothing at or below the requested level.
pub fn spawn_battle_group(
    roster: &[Monster],
    party_size: usize,
    max_level: u32,
    rng: &mut impl Rng,
) -> Vec<Monster> {
    let mut eligible: Vec<&Monster> = roster.iter().filter(|m| m.level == max_level).collect();
    if eligible.is_empty() {
        eligible = roster.iter().filter(|m| m.level < max_level).collect();
    }
    if eligible.is_empty() {
        return Vec::new();
    }

    (0..party_size)
        .map(|_| eligible[rng.gen_range(0..eligible.len())].instantiate())
        .collect()
}
