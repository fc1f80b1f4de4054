use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::entity::{BoardEntity, EntityId, Position};
use crate::items::{Armor, Item, Potion, PotionAttribute, Weapon};

/// Hero classes differ only in which stats they favor on level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroClass {
    Warrior,
    Sorcerer,
    Paladin,
}

impl HeroClass {
    pub fn name(&self) -> &'static str {
        match self {
            HeroClass::Warrior => "Warrior",
            HeroClass::Sorcerer => "Sorcerer",
            HeroClass::Paladin => "Paladin",
        }
    }

    /// Growth multipliers on level-up: (strength, agility, dexterity).
    fn growth(&self) -> (f64, f64, f64) {
        match self {
            HeroClass::Warrior => (FAVORED_STAT_GROWTH, FAVORED_STAT_GROWTH, OFF_STAT_GROWTH),
            HeroClass::Sorcerer => (OFF_STAT_GROWTH, FAVORED_STAT_GROWTH, FAVORED_STAT_GROWTH),
            HeroClass::Paladin => (FAVORED_STAT_GROWTH, OFF_STAT_GROWTH, FAVORED_STAT_GROWTH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub id: EntityId,
    pub name: String,
    pub class: HeroClass,
    pub level: u32,
    pub hp: u32,
    pub mana: u32,
    pub strength: u32,
    pub agility: u32,
    pub dexterity: u32,
    pub money: u32,
    pub experience: u32,
    pub inventory: Vec<Item>,
    pub main_hand: Option<Weapon>,
    pub off_hand: Option<Weapon>,
    pub armor: Option<Armor>,
    /// True while the main-hand weapon is held with both hands, either
    /// because it requires two or as a power grip on a one-handed weapon.
    pub two_handed_grip: bool,
    pub position: Option<Position>,
}

impl Hero {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        class: HeroClass,
        mana: u32,
        strength: u32,
        agility: u32,
        dexterity: u32,
        money: u32,
        experience: u32,
    ) -> Self {
        Self {
            id: EntityId::next(),
            name,
            class,
            level: 1,
            hp: HP_PER_LEVEL,
            mana,
            strength,
            agility,
            dexterity,
            money,
            experience,
            inventory: Vec::new(),
            main_hand: None,
            off_hand: None,
            armor: None,
            two_handed_grip: false,
            position: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Damage reduction from equipped armor, 0 if unarmored.
    pub fn armor_reduction(&self) -> u32 {
        self.armor.as_ref().map_or(0, |a| a.damage_reduction)
    }

    /// Adds experience and applies as many level-ups as the total supports.
    /// The threshold is `level * 10`; each level-up subtracts the threshold,
    /// bumps the level, grows stats per class, and resets HP to `level * 100`.
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: u32) -> u32 {
        self.experience += amount;
        let mut levels_gained = 0;
        while self.experience >= self.level * XP_THRESHOLD_PER_LEVEL {
            self.experience -= self.level * XP_THRESHOLD_PER_LEVEL;
            self.level_up();
            levels_gained += 1;
        }
        levels_gained
    }

    fn level_up(&mut self) {
        let (str_mult, agi_mult, dex_mult) = self.class.growth();
        self.level += 1;
        self.hp = self.level * HP_PER_LEVEL;
        self.mana = (self.mana as f64 * MANA_GROWTH) as u32;
        self.strength = (self.strength as f64 * str_mult) as u32;
        self.agility = (self.agility as f64 * agi_mult) as u32;
        self.dexterity = (self.dexterity as f64 * dex_mult) as u32;
    }

    /// End-of-round regeneration: HP by a tenth of level-derived max, mana
    /// by a tenth of the current value. Both additive and uncapped.
    pub fn regenerate(&mut self) {
        self.hp += (self.level as f64 * HP_PER_LEVEL as f64 * HP_REGEN_FRACTION) as u32;
        self.mana += (self.mana as f64 * MANA_REGEN_FRACTION) as u32;
    }

    pub fn apply_potion(&mut self, potion: &Potion) {
        match potion.attribute {
            PotionAttribute::Health => self.hp += potion.amount,
            PotionAttribute::Mana => self.mana += potion.amount,
            PotionAttribute::Strength => self.strength += potion.amount,
            PotionAttribute::Dexterity => self.dexterity += potion.amount,
            PotionAttribute::Agility => self.agility += potion.amount,
        }
    }

    /// One-line battle summary.
    pub fn status_line(&self) -> String {
        let mut weapon = match &self.main_hand {
            Some(w) => {
                if self.two_handed_grip && w.required_hands == 1 {
                    format!("{} (2H Grip)", w.name)
                } else {
                    w.name.clone()
                }
            }
            None => "None".to_string(),
        };
        if let Some(off) = &self.off_hand {
            weapon = format!("{} & {}", weapon, off.name);
        }
        format!(
            "{} (Lvl {}) HP:{} MP:{} Wpn:{}",
            self.name, self.level, self.hp, self.mana, weapon
        )
    }
}

impl BoardEntity for Hero {
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

#[derive(Debug, Error)]
pub enum PartyError {
    #[error("party already has the maximum of {MAX_PARTY_SIZE} heroes")]
    Full,
}

/// An ordered party of 1-3 heroes. The first hero is the leader; its board
/// position is authoritative and shared by every member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Party {
    heroes: Vec<Hero>,
    pub position: Option<Position>,
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hero(&mut self, hero: Hero) -> Result<(), PartyError> {
        if self.heroes.len() >= MAX_PARTY_SIZE {
            return Err(PartyError::Full);
        }
        self.heroes.push(hero);
        Ok(())
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn heroes_mut(&mut self) -> &mut [Hero] {
        &mut self.heroes
    }

    pub fn hero(&self, index: usize) -> &Hero {
        &self.heroes[index]
    }

    pub fn hero_mut(&mut self, index: usize) -> &mut Hero {
        &mut self.heroes[index]
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn leader(&self) -> Option<&Hero> {
        self.heroes.first()
    }

    pub fn all_fainted(&self) -> bool {
        self.heroes.iter().all(|h| !h.is_alive())
    }

    /// Highest level among members, at least 1. Drives encounter scaling.
    pub fn max_level(&self) -> u32 {
        self.heroes.iter().map(|h| h.level).max().unwrap_or(1).max(1)
    }

    /// Moves the whole party to one logical position.
    pub fn set_position(&mut self, pos: Position) {
        self.position = Some(pos);
        for hero in &mut self.heroes {
            hero.position = Some(pos);
        }
    }

    /// Stands every hero back up at `level * 50` HP. Hard-mode consolation
    /// after a lost battle.
    pub fn revive_all(&mut self) {
        for hero in &mut self.heroes {
            hero.hp = hero.level * REVIVE_HP_PER_LEVEL;
        }
    }

    /// Hard-mode consolation gold after a lost battle.
    pub fn award_consolation_gold(&mut self) {
        for hero in &mut self.heroes {
            hero.money += HARD_LOSS_GOLD_PER_LEVEL * hero.level;
        }
    }
}
