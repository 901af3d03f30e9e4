//! Stats derivation - turning a raw card record into display scores

use card_core::Card;
use serde::{Deserialize, Serialize};

/// Normalized presentation scores for one card
///
/// `hp`, `strength` and `weakness` are bounded to 0..=100 so a bar-style
/// visualization can size proportionally. `damage` is an unbounded running
/// total that only feeds the happiness score. `happiness` is the icon
/// count for the happiness row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: f64,
    pub strength: f64,
    pub weakness: f64,
    pub damage: f64,
    pub happiness: u32,
}

/// Derive display stats from a card
///
/// Total function: missing optional fields fall back to 0 and no input
/// can make it fail. Calling twice on the same card yields bit-identical
/// output.
pub fn derive_stats(card: &Card) -> Stats {
    let hp = card.hp.clamp(0.0, 100.0);

    // 50 points per list entry, capped at the bar maximum
    let strength = match &card.attacks {
        Some(attacks) => (attacks.len() * 50).min(100) as f64,
        None => 0.0,
    };
    let weakness = match &card.weaknesses {
        Some(weaknesses) => (weaknesses.len() * 50).min(100) as f64,
        None => 0.0,
    };

    let damage = match &card.attacks {
        Some(attacks) => attacks.iter().map(|a| printed_damage(&a.damage)).sum(),
        None => 0.0,
    };

    let happiness = happiness(hp, damage, weakness);

    Stats {
        hp,
        strength,
        weakness,
        damage,
        happiness,
    }
}

/// Numeric value of a printed damage string
///
/// All digit characters are concatenated in order and parsed as one
/// integer: "30+" is 30, "10x2" is 102 (concatenation, not
/// multiplication), a string without digits is 0.
fn printed_damage(raw: &str) -> f64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0.0)
}

/// Happiness icon count
///
/// The score is `round(10 + (hp/10 + damage/10 + 10 - weakness) / 5)`,
/// floored at zero: the renderer draws one icon per unit and must never
/// see a negative count. A non-finite intermediate (unreachable for
/// catalog data, but cheap to guard) maps to 0.
fn happiness(hp: f64, damage: f64, weakness: f64) -> u32 {
    let raw = (hp / 10.0 + damage / 10.0 + 10.0 - weakness) / 5.0;
    if !raw.is_finite() {
        return 0;
    }
    (10.0 + raw).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_core::{Attack, Weakness};
    use proptest::prelude::*;

    fn attack(damage: &str) -> Attack {
        Attack {
            name: String::new(),
            damage: damage.to_string(),
        }
    }

    fn card_with_attacks(damages: &[&str]) -> Card {
        let mut card = Card::new("test-1", "Testmon");
        card.attacks = Some(damages.iter().map(|d| attack(d)).collect());
        card
    }

    #[test]
    fn test_hp_above_range_is_clamped() {
        let mut card = Card::new("test-1", "Testmon");
        card.hp = 130.0;
        assert_eq!(derive_stats(&card).hp, 100.0);
    }

    #[test]
    fn test_hp_below_range_is_clamped() {
        let mut card = Card::new("test-1", "Testmon");
        card.hp = -10.0;
        assert_eq!(derive_stats(&card).hp, 0.0);
    }

    #[test]
    fn test_missing_attacks_zero_strength_and_damage() {
        let card = Card::new("test-1", "Testmon");
        let stats = derive_stats(&card);
        assert_eq!(stats.strength, 0.0);
        assert_eq!(stats.damage, 0.0);
    }

    #[test]
    fn test_damage_sums_across_attacks() {
        let stats = derive_stats(&card_with_attacks(&["20", "30"]));
        assert_eq!(stats.damage, 50.0);
    }

    #[test]
    fn test_damage_concatenates_digits() {
        // "10x2" reads as the digit string "102", not as 10 * 2
        let stats = derive_stats(&card_with_attacks(&["10x2"]));
        assert_eq!(stats.damage, 102.0);
    }

    #[test]
    fn test_damage_without_digits_is_zero() {
        let stats = derive_stats(&card_with_attacks(&["×"]));
        assert_eq!(stats.damage, 0.0);
    }

    #[test]
    fn test_strength_caps_at_100() {
        let stats = derive_stats(&card_with_attacks(&["10", "20", "30"]));
        assert_eq!(stats.strength, 100.0);
    }

    #[test]
    fn test_weakness_scores_per_entry() {
        let mut card = Card::new("test-1", "Testmon");
        card.weaknesses = Some(vec![Weakness {
            kind: None,
            value: None,
        }]);
        assert_eq!(derive_stats(&card).weakness, 50.0);
    }

    #[test]
    fn test_happiness_known_value() {
        // hp 60, damage 50, weakness 50:
        // (6 + 5 + 10 - 50) / 5 = -5.8, round(10 - 5.8) = 4
        let mut card = card_with_attacks(&["20", "30"]);
        card.hp = 60.0;
        card.weaknesses = Some(vec![Weakness {
            kind: None,
            value: None,
        }]);
        assert_eq!(derive_stats(&card).happiness, 4);
    }

    #[test]
    fn test_happiness_floors_at_zero() {
        // hp 0, damage 0, weakness 100: round(10 - 18) would be negative
        let mut card = Card::new("test-1", "Testmon");
        card.attacks = Some(Vec::new());
        card.weaknesses = Some(vec![
            Weakness {
                kind: None,
                value: None,
            },
            Weakness {
                kind: None,
                value: None,
            },
        ]);
        assert_eq!(derive_stats(&card).happiness, 0);
    }

    proptest! {
        #[test]
        fn prop_hp_always_within_bar_range(hp in -1000.0..1000.0f64) {
            let mut card = Card::new("test-1", "Testmon");
            card.hp = hp;
            let stats = derive_stats(&card);
            prop_assert!((0.0..=100.0).contains(&stats.hp));
        }

        #[test]
        fn prop_bars_stay_bounded(attacks in 0usize..8, weaknesses in 0usize..8) {
            let mut card = Card::new("test-1", "Testmon");
            card.attacks = Some(vec![attack("20"); attacks]);
            card.weaknesses = Some(vec![Weakness { kind: None, value: None }; weaknesses]);
            let stats = derive_stats(&card);
            prop_assert!(stats.strength <= 100.0);
            prop_assert!(stats.weakness <= 100.0);
        }

        #[test]
        fn prop_derivation_is_deterministic(
            hp in -200.0..200.0f64,
            damage in "[0-9+x ]{0,6}",
        ) {
            let mut card = card_with_attacks(&[damage.as_str()]);
            card.hp = hp;
            prop_assert_eq!(derive_stats(&card), derive_stats(&card));
        }
    }
}
