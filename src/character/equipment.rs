//! Hand-slot and armor-slot rules.
//!
//! Equipping always pulls the new piece out of the hero's inventory and
//! pushes anything it displaces back in, so equipment and inventory stay
//! disjoint. Failed equips mutate nothing.

use thiserror::Error;

use super::types::Hero;
use crate::items::Item;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EquipError {
    #[error("no equippable item at that inventory slot")]
    NoSuchItem,
    #[error("that item is not a weapon")]
    NotAWeapon,
    #[error("that item is not armor")]
    NotArmor,
    #[error("cannot equip a 2-handed weapon in the off-hand")]
    TwoHandedInOffHand,
    #[error("off-hand is blocked while the main hand needs both hands")]
    MainHandOccupiesBothHands,
}

impl Hero {
    /// Equips the weapon at `index` in the inventory to the main hand.
    ///
    /// Always succeeds for a weapon: the previous main-hand weapon goes back
    /// to the inventory, and if the new weapon requires two hands or
    /// `two_handed_grip` is requested, the off-hand weapon is displaced too.
    pub fn equip_main_hand(&mut self, index: usize, two_handed_grip: bool) -> Result<(), EquipError> {
        let weapon = match self.inventory.get(index) {
            Some(Item::Weapon(w)) => w.clone(),
            Some(_) => return Err(EquipError::NotAWeapon),
            None => return Err(EquipError::NoSuchItem),
        };
        self.inventory.remove(index);

        // A 2-handed weapon forces the grip flag on.
        let grip = two_handed_grip || weapon.is_two_handed();

        if let Some(old) = self.main_hand.take() {
            self.inventory.push(Item::Weapon(old));
        }
        if grip {
            if let Some(off) = self.off_hand.take() {
                self.inventory.push(Item::Weapon(off));
            }
        }
        self.main_hand = Some(weapon);
        self.two_handed_grip = grip;
        Ok(())
    }

    /// Equips the weapon at `index` to the off-hand. Declines 2-handed
    /// weapons and any off-hand use while the main hand needs both hands.
    pub fn equip_off_hand(&mut self, index: usize) -> Result<(), EquipError> {
        let weapon = match self.inventory.get(index) {
            Some(Item::Weapon(w)) => w.clone(),
            Some(_) => return Err(EquipError::NotAWeapon),
            None => return Err(EquipError::NoSuchItem),
        };
        if weapon.is_two_handed() {
            return Err(EquipError::TwoHandedInOffHand);
        }
        let main_blocks = self
            .main_hand
            .as_ref()
            .is_some_and(|w| w.is_two_handed() || self.two_handed_grip);
        if main_blocks {
            return Err(EquipError::MainHandOccupiesBothHands);
        }

        self.inventory.remove(index);
        if let Some(old) = self.off_hand.take() {
            self.inventory.push(Item::Weapon(old));
        }
        self.off_hand = Some(weapon);
        Ok(())
    }

    /// Equips the armor at `index`, displacing any worn armor to inventory.
    pub fn equip_armor(&mut self, index: usize) -> Result<(), EquipError> {
        let armor = match self.inventory.get(index) {
            Some(Item::Armor(a)) => a.clone(),
            Some(_) => return Err(EquipError::NotArmor),
            None => return Err(EquipError::NoSuchItem),
        };
        self.inventory.remove(index);
        if let Some(old) = self.armor.take() {
            self.inventory.push(Item::Armor(old));
        }
        self.armor = Some(armor);
        Ok(())
    }
}
