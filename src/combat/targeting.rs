//! Target and menu selection.

use rand::Rng;

use crate::io::{GameInput, GameOutput, InputEvent};
use crate::monsters::Monster;

/// Result of a menu prompt. `Cancelled` covers explicit cancels and invalid
/// input alike; neither consumes the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Chosen(usize),
    Cancelled,
    Quit,
}

/// Prompts for a 1-based pick from `options`. `0` cancels, as does anything
/// unparseable or out of range.
pub fn choose_from_menu(
    input: &mut dyn GameInput,
    output: &mut dyn GameOutput,
    prompt: &str,
    options: &[String],
) -> Selection {
    if options.is_empty() {
        return Selection::Cancelled;
    }
    output.line(prompt);
    for (i, option) in options.iter().enumerate() {
        output.line(&format!("{}. {}", i + 1, option));
    }
    output.line("0. Cancel");

    match input.read_line() {
        InputEvent::Quit => Selection::Quit,
        InputEvent::Line(line) => match line.trim().parse::<usize>() {
            Ok(0) => Selection::Cancelled,
            Ok(n) if n <= options.len() => Selection::Chosen(n - 1),
            _ => {
                output.error("Invalid choice.");
                Selection::Cancelled
            }
        },
    }
}

/// Picks a monster to act on. A lone monster is chosen without prompting.
pub fn select_monster_target(
    monsters: &[Monster],
    input: &mut dyn GameInput,
    output: &mut dyn GameOutput,
) -> Selection {
    if monsters.len() == 1 {
        return Selection::Chosen(0);
    }
    let labels: Vec<String> = monsters
        .iter()
        .map(|m| format!("{} (HP: {})", m.name, m.hp))
        .collect();
    choose_from_menu(input, output, "Select target:", &labels)
}

/// Weighted draw over HP values: lower HP, higher chance. The weight of an
/// entry is `1 / max(1, hp)`.
pub fn weighted_target_index(hps: &[u32], rng: &mut impl Rng) -> Option<usize> {
    if hps.is_empty() {
        return None;
    }
    let weights: Vec<f64> = hps.iter().map(|&hp| 1.0 / hp.max(1) as f64).collect();
    let total: f64 = weights.iter().sum();
    let mut value = rng.gen::<f64>() * total;
    for (i, w) in weights.iter().enumerate() {
        value -= w;
        if value <= 0.0 {
            return Some(i);
        }
    }
    // Floating-point residue lands on the last entry
    Some(hps.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{BufferedOutput, ScriptedInput};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_menu_accepts_one_based_choice() {
        let mut input = ScriptedInput::new(["2"]);
        let mut output = BufferedOutput::new();
        let options = vec!["First".to_string(), "Second".to_string()];
        let sel = choose_from_menu(&mut input, &mut output, "Pick:", &options);
        assert_eq!(sel, Selection::Chosen(1));
        assert!(output.contains("1. First"));
        assert!(output.contains("0. Cancel"));
    }

    #[test]
    fn test_menu_rejects_garbage_and_out_of_range() {
        let options = vec!["Only".to_string()];
        for bad in ["potato", "7", ""] {
            let mut input = ScriptedInput::new([bad]);
            let mut output = BufferedOutput::new();
            assert_eq!(
                choose_from_menu(&mut input, &mut output, "Pick:", &options),
                Selection::Cancelled
            );
        }
        let mut input = ScriptedInput::new(["0"]);
        let mut output = BufferedOutput::new();
        assert_eq!(
            choose_from_menu(&mut input, &mut output, "Pick:", &options),
            Selection::Cancelled
        );
    }

    #[test]
    fn test_menu_propagates_quit() {
        let mut input = ScriptedInput::default(); // dry script yields Quit
        let mut output = BufferedOutput::new();
        let options = vec!["Only".to_string()];
        assert_eq!(
            choose_from_menu(&mut input, &mut output, "Pick:", &options),
            Selection::Quit
        );
    }

    #[test]
    fn test_weighted_draw_favors_low_hp() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let hps = [10, 100];
        let mut low = 0;
        let trials = 4000;
        for _ in 0..trials {
            if weighted_target_index(&hps, &mut rng) == Some(0) {
                low += 1;
            }
        }
        // Expected share 10/11
        let share = low as f64 / trials as f64;
        assert!((0.87..=0.95).contains(&share), "{share}");
    }

    #[test]
    fn test_weighted_draw_handles_edge_cases() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(weighted_target_index(&[], &mut rng), None);
        assert_eq!(weighted_target_index(&[42], &mut rng), Some(0));
        // Zero HP entries use a weight floor instead of dividing by zero
        assert!(weighted_target_index(&[0, 0], &mut rng).is_some());
    }
}
