use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotionAttribute {
    Health,
    Mana,
    Strength,
    Dexterity,
    Agility,
}

impl PotionAttribute {
    pub fn name(&self) -> &'static str {
        match self {
            PotionAttribute::Health => "Health",
            PotionAttribute::Mana => "Mana",
            PotionAttribute::Strength => "Strength",
            PotionAttribute::Dexterity => "Dexterity",
            PotionAttribute::Agility => "Agility",
        }
    }
}

/// Spell families differ only in which monster stat their debuff hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellFamily {
    /// Debuffs the target's defense.
    Fire,
    /// Debuffs the target's damage.
    Ice,
    /// Debuffs the target's dodge chance.
    Lightning,
}

impl SpellFamily {
    pub fn name(&self) -> &'static str {
        match self {
            SpellFamily::Fire => "Fire",
            SpellFamily::Ice => "Ice",
            SpellFamily::Lightning => "Lightning",
        }
    }

    pub fn effect_description(&self) -> &'static str {
        match self {
            SpellFamily::Fire => "Reduces target's defense",
            SpellFamily::Ice => "Reduces target's damage",
            SpellFamily::Lightning => "Reduces target's dodge chance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub cost: u32,
    pub required_level: u32,
    pub damage: u32,
    /// 1 or 2.
    pub required_hands: u8,
}

impl Weapon {
    pub fn is_two_handed(&self) -> bool {
        self.required_hands == 2
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    pub name: String,
    pub cost: u32,
    pub required_level: u32,
    pub damage_reduction: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Potion {
    pub name: String,
    pub cost: u32,
    pub required_level: u32,
    pub attribute: PotionAttribute,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    pub cost: u32,
    pub required_level: u32,
    pub damage: u32,
    pub mana_cost: u32,
    pub family: SpellFamily,
}

/// An inventory item. The variant set is closed and exhaustively matched on
/// everywhere it matters (action menus, equipment rules).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Item {
    Weapon(Weapon),
    Armor(Armor),
    Potion(Potion),
    Spell(Spell),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Weapon(w) => &w.name,
            Item::Armor(a) => &a.name,
            Item::Potion(p) => &p.name,
            Item::Spell(s) => &s.name,
        }
    }

    pub fn cost(&self) -> u32 {
        match self {
            Item::Weapon(w) => w.cost,
            Item::Armor(a) => a.cost,
            Item::Potion(p) => p.cost,
            Item::Spell(s) => s.cost,
        }
    }

    pub fn required_level(&self) -> u32 {
        match self {
            Item::Weapon(w) => w.required_level,
            Item::Armor(a) => a.required_level,
            Item::Potion(p) => p.required_level,
            Item::Spell(s) => s.required_level,
        }
    }

    /// Weapons and armor are the only things the equipment menu offers.
    pub fn is_gear(&self) -> bool {
        matches!(self, Item::Weapon(_) | Item::Armor(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dagger() -> Weapon {
        Weapon {
            name: "Dagger".to_string(),
            cost: 200,
            required_level: 1,
            damage: 250,
            required_hands: 1,
        }
    }

    #[test]
    fn test_weapon_handedness() {
        let mut w = dagger();
        assert!(!w.is_two_handed());
        w.required_hands = 2;
        assert!(w.is_two_handed());
    }

    #[test]
    fn test_item_accessors() {
        let item = Item::Weapon(dagger());
        assert_eq!(item.name(), "Dagger");
        assert_eq!(item.cost(), 200);
        assert_eq!(item.required_level(), 1);
        assert!(item.is_gear());

        let potion = Item::Potion(Potion {
            name: "Healing Potion".to_string(),
            cost: 250,
            required_level: 1,
            attribute: PotionAttribute::Health,
            amount: 100,
        });
        assert!(!potion.is_gear());
    }

    #[test]
    fn test_spell_family_effects() {
        assert_eq!(
            SpellFamily::Fire.effect_description(),
            "Reduces target's defense"
        );
        assert_eq!(
            SpellFamily::Ice.effect_description(),
            "Reduces target's damage"
        );
        assert_eq!(
            SpellFamily::Lightning.effect_description(),
            "Reduces target's dodge chance"
        );
    }
}
