//! Scoring module - per-word points and end-of-game rewards
//!
//! - Regular words: `BASE_WORD_POINTS + letters * LETTER_POINTS`, plus
//!   `COMBO_BONUS` when found within `COMBO_WINDOW_SECS` of the previous find.
//! - Bonus words: `BONUS_BASE_POINTS + letters * LETTER_POINTS`, and a
//!   length-keyed coin/xp reward paid at the end of the game.
//! - End of game: base coins/xp, time and perfect bonuses, per-word xp.

use crate::types::{
    bonus_reward, BonusReward, DifficultyConfig, BASE_WORD_POINTS, BONUS_BASE_POINTS, COMBO_BONUS,
    COMBO_WINDOW_SECS, LETTER_POINTS, PERFECT_COIN_BONUS, PERFECT_XP_BONUS,
    TIME_BONUS_COIN_DENOMINATOR, TIME_BONUS_COIN_NUMERATOR, TIME_BONUS_XP_PER_SEC, XP_PER_WORD,
};

/// Points awarded for one find
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Base plus letter points.
    pub word_points: u32,
    /// Combo bonus added on top of `word_points`.
    pub combo_bonus: u32,
    pub total: u32,
}

/// Whether a find at `now` follows the previous one closely enough for a combo.
///
/// Both values are session clock seconds.
pub fn is_combo(last_find_at: Option<u32>, now: u32) -> bool {
    match last_find_at {
        Some(last) => now.saturating_sub(last) <= COMBO_WINDOW_SECS,
        None => false,
    }
}

/// Score a regular word of `letters` letters.
pub fn calculate_word_score(letters: usize, combo: bool) -> ScoreResult {
    let word_points = BASE_WORD_POINTS.saturating_add(letter_points(letters));
    let combo_bonus = if combo { COMBO_BONUS } else { 0 };
    ScoreResult {
        word_points,
        combo_bonus,
        total: word_points.saturating_add(combo_bonus),
    }
}

/// Score a bonus dictionary word of `letters` letters.
pub fn calculate_bonus_score(letters: usize) -> u32 {
    BONUS_BASE_POINTS.saturating_add(letter_points(letters))
}

fn letter_points(letters: usize) -> u32 {
    (letters as u32).saturating_mul(LETTER_POINTS)
}

/// Coins and xp paid when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rewards {
    pub coins: u32,
    pub xp: u32,
}

/// Everything the reward calculation needs to know about a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardInput {
    pub is_perfect: bool,
    pub time_remaining: u32,
    pub regular_words_found: usize,
}

/// Calculate end-of-game rewards.
///
/// ```
/// use wordsearch_core::scoring::{calculate_rewards, RewardInput};
/// use wordsearch_core::types::Difficulty;
///
/// let input = RewardInput { is_perfect: true, time_remaining: 15, regular_words_found: 0 };
/// let rewards = calculate_rewards(&Difficulty::Easy.config(), input, std::iter::empty());
/// assert_eq!(rewards.coins, 10 + 7 + 20);
/// ```
pub fn calculate_rewards(
    config: &DifficultyConfig,
    input: RewardInput,
    bonus_words: impl IntoIterator<Item = BonusReward>,
) -> Rewards {
    let mut coins = config.coin_reward;
    let mut xp = config.xp_reward;

    if input.is_perfect && input.time_remaining > 0 {
        coins += time_bonus_coins(input.time_remaining);
        xp += input.time_remaining.saturating_mul(TIME_BONUS_XP_PER_SEC);
    }

    if input.is_perfect {
        coins += PERFECT_COIN_BONUS;
        xp += PERFECT_XP_BONUS;
    }

    xp += (input.regular_words_found as u32).saturating_mul(XP_PER_WORD);

    for reward in bonus_words {
        coins += reward.coins;
        xp += reward.xp;
    }

    Rewards { coins, xp }
}

/// Coins for the seconds left on a perfect game, rounded down.
pub fn time_bonus_coins(time_remaining: u32) -> u32 {
    time_remaining
        .saturating_mul(TIME_BONUS_COIN_NUMERATOR)
        .saturating_div(TIME_BONUS_COIN_DENOMINATOR)
}

/// Reward for a found bonus word, keyed by its length.
pub fn bonus_word_reward(letters: usize) -> BonusReward {
    bonus_reward(letters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;

    #[test]
    fn test_word_score() {
        let result = calculate_word_score(5, false);
        assert_eq!(result.word_points, 150);
        assert_eq!(result.combo_bonus, 0);
        assert_eq!(result.total, 150);

        let result = calculate_word_score(5, true);
        assert_eq!(result.combo_bonus, 50);
        assert_eq!(result.total, 200);
    }

    #[test]
    fn test_combo_window() {
        assert!(!is_combo(None, 3));
        assert!(is_combo(Some(10), 15));
        assert!(!is_combo(Some(10), 16));
        assert!(is_combo(Some(10), 10));
    }

    #[test]
    fn test_bonus_score() {
        assert_eq!(calculate_bonus_score(3), 80);
        assert_eq!(calculate_bonus_score(6), 110);
    }

    #[test]
    fn test_time_bonus_rounds_down() {
        assert_eq!(time_bonus_coins(15), 7);
        assert_eq!(time_bonus_coins(1), 0);
        assert_eq!(time_bonus_coins(0), 0);
    }

    #[test]
    fn test_perfect_rewards() {
        let cfg = Difficulty::Easy.config();
        let input = RewardInput {
            is_perfect: true,
            time_remaining: 15,
            regular_words_found: 6,
        };
        let rewards = calculate_rewards(&cfg, input, std::iter::empty());
        assert_eq!(rewards.coins, 10 + 7 + 20);
        assert_eq!(rewards.xp, 20 + 15 + 50 + 6 * 5);
    }

    #[test]
    fn test_imperfect_rewards_skip_time_and_perfect_bonus() {
        let cfg = Difficulty::Medium.config();
        let input = RewardInput {
            is_perfect: false,
            time_remaining: 100,
            regular_words_found: 3,
        };
        let rewards = calculate_rewards(&cfg, input, [bonus_word_reward(4)]);
        assert_eq!(rewards.coins, 20 + 10);
        assert_eq!(rewards.xp, 40 + 3 * 5 + 20);
    }

    #[test]
    fn test_perfect_with_no_time_left() {
        let cfg = Difficulty::Hard.config();
        let input = RewardInput {
            is_perfect: true,
            time_remaining: 0,
            regular_words_found: 1,
        };
        let rewards = calculate_rewards(&cfg, input, std::iter::empty());
        assert_eq!(rewards.coins, 35 + 20);
        assert_eq!(rewards.xp, 70 + 50 + 5);
    }
}
