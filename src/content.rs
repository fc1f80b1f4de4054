//! Static content records.
//!
//! Already-parsed stat rows for heroes, monsters, and items. The core never
//! reads files; collaborators may deserialize their own tables into these
//! shapes, and the defaults below make the crate playable out of the box.
//! Hero mana values follow the loader convention of a third of the roster's
//! listed figure.

use serde::{Deserialize, Serialize};

use crate::character::{Hero, HeroClass};
use crate::items::{Armor, Item, Potion, PotionAttribute, Spell, SpellFamily, Weapon};
use crate::monsters::MonsterKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroRecord {
    pub name: String,
    pub class: HeroClass,
    pub mana: u32,
    pub strength: u32,
    pub agility: u32,
    pub dexterity: u32,
    pub money: u32,
    pub experience: u32,
}

impl HeroRecord {
    pub fn to_hero(&self) -> Hero {
        Hero::new(
            self.name.clone(),
            self.class,
            self.mana,
            self.strength,
            self.agility,
            self.dexterity,
            self.money,
            self.experience,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterRecord {
    pub name: String,
    pub kind: MonsterKind,
    pub level: u32,
    pub damage: u32,
    pub defense: u32,
    pub dodge_chance: u32,
}

fn hero(
    name: &str,
    class: HeroClass,
    mana: u32,
    strength: u32,
    agility: u32,
    dexterity: u32,
    money: u32,
    experience: u32,
) -> HeroRecord {
    HeroRecord {
        name: name.to_string(),
        class,
        mana: mana / 3,
        strength,
        agility,
        dexterity,
        money,
        experience,
    }
}

fn monster(
    name: &str,
    kind: MonsterKind,
    level: u32,
    damage: u32,
    defense: u32,
    dodge_chance: u32,
) -> MonsterRecord {
    MonsterRecord {
        name: name.to_string(),
        kind,
        level,
        damage,
        defense,
        dodge_chance,
    }
}

pub fn default_heroes() -> Vec<HeroRecord> {
    use HeroClass::*;
    vec![
        hero("Gaerdal Ironhand", Warrior, 100, 700, 500, 600, 1354, 7),
        hero("Sehanine Monnbow", Warrior, 600, 700, 800, 500, 2500, 8),
        hero("Muamman Duathall", Warrior, 300, 900, 500, 750, 2546, 6),
        hero("Rillifane Rallathil", Sorcerer, 1300, 750, 450, 500, 2500, 9),
        hero("Segojan Earthcaller", Sorcerer, 900, 800, 500, 650, 2500, 5),
        hero("Reign Havoc", Sorcerer, 800, 800, 800, 800, 2500, 8),
        hero("Parzival", Paladin, 300, 750, 650, 700, 2500, 7),
        hero("Sehanine Moonbow", Paladin, 300, 750, 700, 700, 2500, 7),
        hero("Skoraeus Stonebones", Paladin, 250, 650, 600, 350, 2500, 4),
    ]
}

pub fn default_monsters() -> Vec<MonsterRecord> {
    use MonsterKind::*;
    vec![
        monster("Desghidorrah", Dragon, 3, 300, 400, 35),
        monster("Chrysophylax", Dragon, 2, 200, 500, 20),
        monster("Bunsen Burner", Dragon, 4, 400, 500, 45),
        monster("Natsunomeryu", Dragon, 1, 100, 200, 10),
        monster("Cyrrollalee", Exoskeleton, 1, 100, 600, 20),
        monster("Blinky", Exoskeleton, 2, 250, 700, 30),
        monster("Brandobaris", Exoskeleton, 3, 350, 600, 15),
        monster("Exodia", Exoskeleton, 4, 450, 700, 35),
        monster("Casper", Spirit, 1, 100, 400, 25),
        monster("Andrealphus", Spirit, 2, 600, 500, 40),
        monster("Chiron", Spirit, 4, 500, 600, 40),
        monster("Aslan", Spirit, 6, 600, 500, 35),
    ]
}

fn weapon(name: &str, cost: u32, required_level: u32, damage: u32, required_hands: u8) -> Item {
    Item::Weapon(Weapon {
        name: name.to_string(),
        cost,
        required_level,
        damage,
        required_hands,
    })
}

fn armor(name: &str, cost: u32, required_level: u32, damage_reduction: u32) -> Item {
    Item::Armor(Armor {
        name: name.to_string(),
        cost,
        required_level,
        damage_reduction,
    })
}

fn potion(
    name: &str,
    cost: u32,
    required_level: u32,
    amount: u32,
    attribute: PotionAttribute,
) -> Item {
    Item::Potion(Potion {
        name: name.to_string(),
        cost,
        required_level,
        attribute,
        amount,
    })
}

fn spell(
    name: &str,
    cost: u32,
    required_level: u32,
    damage: u32,
    mana_cost: u32,
    family: SpellFamily,
) -> Item {
    Item::Spell(Spell {
        name: name.to_string(),
        cost,
        required_level,
        damage,
        mana_cost,
        family,
    })
}

pub fn default_items() -> Vec<Item> {
    use PotionAttribute::*;
    use SpellFamily::*;
    vec![
        weapon("Sword", 500, 1, 800, 1),
        weapon("Bow", 300, 2, 500, 2),
        weapon("Scythe", 1000, 6, 1100, 2),
        weapon("Axe", 550, 5, 850, 1),
        weapon("Twin Swords", 1400, 8, 1600, 2),
        weapon("Dagger", 200, 1, 250, 1),
        armor("Platinum Shield", 150, 1, 200),
        armor("Breastplate", 350, 3, 600),
        armor("Full Body Armor", 1000, 8, 1100),
        armor("Wizard Shield", 1200, 10, 1500),
        armor("Guardian Angel", 1000, 10, 1000),
        potion("Healing Potion", 250, 1, 100, Health),
        potion("Strength Potion", 200, 1, 75, Strength),
        potion("Magic Potion", 350, 2, 100, Mana),
        potion("Luck Elixir", 500, 4, 65, Agility),
        potion("Precision Draught", 450, 3, 80, Dexterity),
        spell("Flame Tornado", 700, 4, 850, 300, Fire),
        spell("Breath of Fire", 350, 1, 450, 100, Fire),
        spell("Heat Wave", 450, 2, 600, 150, Fire),
        spell("Snow Cannon", 500, 2, 650, 250, Ice),
        spell("Ice Blade", 250, 1, 450, 100, Ice),
        spell("Lightning Dagger", 400, 1, 500, 150, Lightning),
        spell("Thunder Blast", 750, 4, 950, 400, Lightning),
    ]
}
