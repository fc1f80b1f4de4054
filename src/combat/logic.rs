//! The battle state machine.
//!
//! A battle owns its monsters (battle-scoped clones) and borrows the party.
//! Rounds run until one side is gone or the player quits: defeat is checked
//! before victory at the top of each round, heroes act in party order with a
//! re-prompt loop that only ends once an action validates and completes,
//! then every monster strikes a weighted target, then survivors regenerate.

use rand::Rng;

use crate::character::Party;
use crate::constants::{REVIVE_HP_PER_LEVEL, REWARD_GOLD_FACTOR, REWARD_XP_FACTOR};
use crate::io::{GameInput, GameOutput, InputEvent};
use crate::items::{Item, Potion, Spell, SpellFamily};
use crate::monsters::Monster;

use super::damage::{
    hero_attack_rating, hero_dodges, mitigated_damage, monster_dodges, spell_damage,
};
use super::targeting::{choose_from_menu, select_monster_target, weighted_target_index, Selection};
use super::types::{BattleOutcome, Difficulty};

/// How one attempted action resolved. Retries never consume the turn.
enum TurnFlow {
    Acted,
    Retry,
    Quit,
}

pub struct Battle<'a> {
    party: &'a mut Party,
    monsters: Vec<Monster>,
    initial_monster_count: usize,
    max_monster_level: u32,
}

impl<'a> Battle<'a> {
    /// Records the reward basis (count and max level) before difficulty
    /// scaling, then scales the battle-scoped monsters for Hard.
    pub fn new(party: &'a mut Party, mut monsters: Vec<Monster>, difficulty: Difficulty) -> Self {
        let initial_monster_count = monsters.len();
        let max_monster_level = monsters.iter().map(|m| m.level).max().unwrap_or(0);
        if difficulty != Difficulty::Normal {
            let mult = difficulty.monster_stat_mult();
            for monster in &mut monsters {
                monster.damage = (monster.damage as f64 * mult) as u32;
                monster.defense = (monster.defense as f64 * mult) as u32;
                monster.dodge_chance = (monster.dodge_chance as f64 * mult) as u32;
            }
        }
        Self {
            party,
            monsters,
            initial_monster_count,
            max_monster_level,
        }
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn run(
        &mut self,
        input: &mut dyn GameInput,
        output: &mut dyn GameOutput,
        rng: &mut impl Rng,
    ) -> BattleOutcome {
        output.emphasis("--- Battle Started! ---");
        loop {
            if self.party.all_fainted() {
                output.error("All heroes have fainted!");
                return BattleOutcome::Defeat;
            }
            if self.monsters.is_empty() {
                output.emphasis("All monsters defeated! Victory!");
                self.distribute_rewards(output);
                return BattleOutcome::Victory;
            }

            output.emphasis("--- New Round ---");
            self.show_battle_status(output);

            for hero_index in 0..self.party.len() {
                if !self.party.hero(hero_index).is_alive() || self.monsters.is_empty() {
                    continue;
                }
                if !self.hero_turn(hero_index, input, output, rng) {
                    return BattleOutcome::Abandoned;
                }
            }

            self.monster_phase(output, rng);

            for hero in self.party.heroes_mut() {
                if hero.is_alive() {
                    hero.regenerate();
                }
            }
        }
    }

    fn show_battle_status(&self, output: &mut dyn GameOutput) {
        output.line("Heroes:");
        for hero in self.party.heroes() {
            if hero.is_alive() {
                output.line(&hero.status_line());
            } else {
                output.line(&format!("{} (Fainted)", hero.name));
            }
        }
        output.line("Monsters:");
        for (i, monster) in self.monsters.iter().enumerate() {
            output.line(&format!("{}. {}", i + 1, monster.status_line()));
        }
    }

    /// Runs one hero's turn. Returns false when the player quit.
    fn hero_turn(
        &mut self,
        hero_index: usize,
        input: &mut dyn GameInput,
        output: &mut dyn GameOutput,
        rng: &mut impl Rng,
    ) -> bool {
        loop {
            if self.monsters.is_empty() {
                return true;
            }
            output.line(&format!("{}'s turn.", self.party.hero(hero_index).name));
            output.line("1. Attack");
            output.line("2. Cast Spell");
            output.line("3. Use Potion");
            output.line("4. Change Equipment");

            let flow = match input.read_line() {
                InputEvent::Quit => TurnFlow::Quit,
                InputEvent::Line(line) => match line.trim() {
                    "1" => self.perform_attack(hero_index, input, output, rng),
                    "2" => self.perform_cast_spell(hero_index, input, output),
                    "3" => self.perform_use_potion(hero_index, input, output),
                    "4" => self.perform_change_equipment(hero_index, input, output),
                    _ => {
                        output.error("Invalid action. Please try again.");
                        TurnFlow::Retry
                    }
                },
            };
            match flow {
                TurnFlow::Acted => return true,
                TurnFlow::Retry => {}
                TurnFlow::Quit => return false,
            }
        }
    }

    fn perform_attack(
        &mut self,
        hero_index: usize,
        input: &mut dyn GameInput,
        output: &mut dyn GameOutput,
        rng: &mut impl Rng,
    ) -> TurnFlow {
        let target = match select_monster_target(&self.monsters, input, output) {
            Selection::Quit => return TurnFlow::Quit,
            Selection::Cancelled => return TurnFlow::Retry,
            Selection::Chosen(i) => i,
        };

        if monster_dodges(&self.monsters[target], self.party.hero(hero_index), rng) {
            output.line(&format!("{} dodged the attack!", self.monsters[target].name));
            return TurnFlow::Acted;
        }

        let hero = self.party.hero(hero_index);
        let damage = mitigated_damage(hero_attack_rating(hero), self.monsters[target].defense as f64);
        let hero_name = hero.name.clone();
        self.monsters[target].take_damage(damage);
        output.line(&format!(
            "{} dealt {} damage to {}",
            hero_name, damage, self.monsters[target].name
        ));
        self.remove_if_dead(target, output);
        TurnFlow::Acted
    }

    fn perform_cast_spell(
        &mut self,
        hero_index: usize,
        input: &mut dyn GameInput,
        output: &mut dyn GameOutput,
    ) -> TurnFlow {
        let spells: Vec<Spell> = self
            .party
            .hero(hero_index)
            .inventory
            .iter()
            .filter_map(|item| match item {
                Item::Spell(s) => Some(s.clone()),
                _ => None,
            })
            .collect();
        if spells.is_empty() {
            output.error("No spells available.");
            return TurnFlow::Retry;
        }

        let labels: Vec<String> = spells
            .iter()
            .map(|s| format!("{} (MP: {}, Dmg: {})", s.name, s.mana_cost, s.damage))
            .collect();
        let spell = match choose_from_menu(input, output, "Select spell:", &labels) {
            Selection::Quit => return TurnFlow::Quit,
            Selection::Cancelled => return TurnFlow::Retry,
            Selection::Chosen(i) => spells[i].clone(),
        };

        // Mana gate before target selection; deduction happens on cast.
        if self.party.hero(hero_index).mana < spell.mana_cost {
            output.error("Not enough mana!");
            return TurnFlow::Retry;
        }

        let target = match select_monster_target(&self.monsters, input, output) {
            Selection::Quit => return TurnFlow::Quit,
            Selection::Cancelled => return TurnFlow::Retry,
            Selection::Chosen(i) => i,
        };

        let hero = self.party.hero_mut(hero_index);
        hero.mana -= spell.mana_cost;
        let damage = spell_damage(spell.damage, hero.dexterity);
        let hero_name = hero.name.clone();

        // Spells ignore dodge and defense; the debuff lands with the hit.
        self.monsters[target].take_damage(damage);
        output.line(&format!(
            "{} cast {} on {} for {} damage.",
            hero_name, spell.name, self.monsters[target].name, damage
        ));
        self.apply_spell_debuff(target, spell.family, output);
        self.remove_if_dead(target, output);
        TurnFlow::Acted
    }

    fn apply_spell_debuff(
        &mut self,
        target: usize,
        family: SpellFamily,
        output: &mut dyn GameOutput,
    ) {
        let monster = &mut self.monsters[target];
        let (stat, reduction) = match family {
            SpellFamily::Fire => ("defense", monster.reduce_defense_by_tenth()),
            SpellFamily::Ice => ("damage", monster.reduce_damage_by_tenth()),
            SpellFamily::Lightning => ("dodge chance", monster.reduce_dodge_by_tenth()),
        };
        output.line(&format!("{}'s {} reduced by {}.", monster.name, stat, reduction));
    }

    fn perform_use_potion(
        &mut self,
        hero_index: usize,
        input: &mut dyn GameInput,
        output: &mut dyn GameOutput,
    ) -> TurnFlow {
        let potion_slots: Vec<(usize, Potion)> = self
            .party
            .hero(hero_index)
            .inventory
            .iter()
            .enumerate()
            .filter_map(|(i, item)| match item {
                Item::Potion(p) => Some((i, p.clone())),
                _ => None,
            })
            .collect();
        if potion_slots.is_empty() {
            output.error("No potions available.");
            return TurnFlow::Retry;
        }

        let labels: Vec<String> = potion_slots
            .iter()
            .map(|(_, p)| format!("{} (+{} {})", p.name, p.amount, p.attribute.name()))
            .collect();
        let (inv_index, potion) = match choose_from_menu(input, output, "Select potion:", &labels) {
            Selection::Quit => return TurnFlow::Quit,
            Selection::Cancelled => return TurnFlow::Retry,
            Selection::Chosen(i) => potion_slots[i].clone(),
        };

        let target = match self.select_hero_target(input, output) {
            Selection::Quit => return TurnFlow::Quit,
            Selection::Cancelled => return TurnFlow::Retry,
            Selection::Chosen(i) => i,
        };

        self.party.hero_mut(target).apply_potion(&potion);
        let target_name = self.party.hero(target).name.clone();
        let user = self.party.hero_mut(hero_index);
        user.inventory.remove(inv_index);
        output.line(&format!("{} used {} on {}.", user.name, potion.name, target_name));
        TurnFlow::Acted
    }

    /// Potions may target any member, fainted included. A lone hero is
    /// chosen without prompting.
    fn select_hero_target(
        &self,
        input: &mut dyn GameInput,
        output: &mut dyn GameOutput,
    ) -> Selection {
        if self.party.len() == 1 {
            return Selection::Chosen(0);
        }
        let labels: Vec<String> = self
            .party
            .heroes()
            .iter()
            .map(|h| {
                if h.is_alive() {
                    format!("{} (HP: {})", h.name, h.hp)
                } else {
                    format!("{} (Fainted)", h.name)
                }
            })
            .collect();
        choose_from_menu(input, output, "Select hero:", &labels)
    }

    fn perform_change_equipment(
        &mut self,
        hero_index: usize,
        input: &mut dyn GameInput,
        output: &mut dyn GameOutput,
    ) -> TurnFlow {
        let hero = self.party.hero(hero_index);
        let gear_slots: Vec<usize> = hero
            .inventory
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_gear())
            .map(|(i, _)| i)
            .collect();
        if gear_slots.is_empty() {
            output.error("No equipment available in inventory.");
            return TurnFlow::Retry;
        }

        output.line(&format!(
            "Main hand: {}",
            hero.main_hand.as_ref().map_or("None", |w| w.name.as_str())
        ));
        output.line(&format!(
            "Off hand: {}",
            hero.off_hand.as_ref().map_or("None", |w| w.name.as_str())
        ));
        output.line(&format!(
            "Armor: {}",
            hero.armor.as_ref().map_or("None", |a| a.name.as_str())
        ));

        let labels: Vec<String> = gear_slots
            .iter()
            .map(|&i| match &hero.inventory[i] {
                Item::Weapon(w) => {
                    format!("{} (Dmg: {}, Hands: {})", w.name, w.damage, w.required_hands)
                }
                Item::Armor(a) => format!("{} (Def: {})", a.name, a.damage_reduction),
                other => other.name().to_string(),
            })
            .collect();
        let pick = match choose_from_menu(input, output, "Select equipment:", &labels) {
            Selection::Quit => return TurnFlow::Quit,
            Selection::Cancelled => return TurnFlow::Retry,
            Selection::Chosen(i) => gear_slots[i],
        };

        let item = self.party.hero(hero_index).inventory[pick].clone();
        let result = match &item {
            Item::Armor(_) => self.party.hero_mut(hero_index).equip_armor(pick),
            Item::Weapon(w) if w.is_two_handed() => {
                self.party.hero_mut(hero_index).equip_main_hand(pick, false)
            }
            Item::Weapon(_) => {
                output.line("Equip to: 1. Main Hand  2. Off Hand  3. Main Hand (2-Handed Grip)");
                match input.read_line() {
                    InputEvent::Quit => return TurnFlow::Quit,
                    InputEvent::Line(line) => match line.trim() {
                        "1" => self.party.hero_mut(hero_index).equip_main_hand(pick, false),
                        "2" => self.party.hero_mut(hero_index).equip_off_hand(pick),
                        "3" => self.party.hero_mut(hero_index).equip_main_hand(pick, true),
                        _ => {
                            output.error("Invalid choice.");
                            return TurnFlow::Retry;
                        }
                    },
                }
            }
            _ => return TurnFlow::Retry,
        };
        match result {
            Ok(()) => {
                output.line(&format!("Equipped {}.", item.name()));
                TurnFlow::Acted
            }
            Err(err) => {
                output.error(&err.to_string());
                TurnFlow::Retry
            }
        }
    }

    fn remove_if_dead(&mut self, index: usize, output: &mut dyn GameOutput) {
        if !self.monsters[index].is_alive() {
            output.emphasis(&format!("{} has been defeated!", self.monsters[index].name));
            self.monsters.remove(index);
        }
    }

    /// Every monster strikes once, favoring wounded heroes.
    fn monster_phase(&mut self, output: &mut dyn GameOutput, rng: &mut impl Rng) {
        for monster_index in 0..self.monsters.len() {
            let alive: Vec<usize> = (0..self.party.len())
                .filter(|&i| self.party.hero(i).is_alive())
                .collect();
            let hps: Vec<u32> = alive.iter().map(|&i| self.party.hero(i).hp).collect();
            let pick = match weighted_target_index(&hps, rng) {
                Some(p) => p,
                None => return,
            };
            let hero_index = alive[pick];
            let monster_name = self.monsters[monster_index].name.clone();

            if hero_dodges(self.party.hero(hero_index), rng) {
                output.line(&format!(
                    "{} dodged {}'s attack!",
                    self.party.hero(hero_index).name,
                    monster_name
                ));
                continue;
            }

            let damage = mitigated_damage(
                self.monsters[monster_index].damage as f64,
                self.party.hero(hero_index).armor_reduction() as f64,
            );
            let hero = self.party.hero_mut(hero_index);
            hero.take_damage(damage);
            output.line(&format!(
                "{} attacked {} for {} damage.",
                monster_name, hero.name, damage
            ));
        }
    }

    /// Victory payout: XP and gold to survivors from the pre-battle count
    /// and level, fainted members stood back up at `level * 50` HP.
    fn distribute_rewards(&mut self, output: &mut dyn GameOutput) {
        let xp = self.initial_monster_count as u32 * self.max_monster_level * REWARD_XP_FACTOR;
        let gold = self.initial_monster_count as u32 * self.max_monster_level * REWARD_GOLD_FACTOR;
        for hero in self.party.heroes_mut() {
            if hero.is_alive() {
                hero.money += gold;
                let levels = hero.gain_experience(xp);
                output.emphasis(&format!("{} gained {} gold and {} XP.", hero.name, gold, xp));
                if levels > 0 {
                    output.emphasis(&format!("{} reached level {}!", hero.name, hero.level));
                }
            } else {
                hero.hp = hero.level * REVIVE_HP_PER_LEVEL;
                output.emphasis(&format!(
                    "{} has been revived with {} HP.",
                    hero.name, hero.hp
                ));
            }
        }
    }
}
