use hangman_types::{
    CORRECT_GUESS_POINTS, Category, GuessOutcome, INCORRECT_GUESS_PENALTY, PlayerLevel,
    PlayerProfile, WORDS_PER_CATEGORY,
};
use tracing::info;

use crate::Word;

/// Scoring, completion and leveling rules applied to player profiles.
pub struct ProgressionPolicy;

impl ProgressionPolicy {
    /// Record a completed word. Returns false if it was already recorded.
    pub fn record_completion(profile: &mut PlayerProfile, category: Category, word_text: &str) -> bool {
        profile.completed_words_mut().insert(category, word_text)
    }

    /// Number of playable categories with at least `words_per_category`
    /// completed words.
    pub fn completed_category_count(profile: &PlayerProfile, words_per_category: usize) -> usize {
        Category::PLAYABLE
            .iter()
            .filter(|&&category| profile.completed_words().count(category) >= words_per_category)
            .count()
    }

    pub fn level_for_count(completed_categories: usize) -> PlayerLevel {
        match completed_categories {
            n if n >= 4 => PlayerLevel::Expert,
            n if n >= 2 => PlayerLevel::Intermediate,
            _ => PlayerLevel::Beginner,
        }
    }

    pub fn derive_level(profile: &PlayerProfile) -> PlayerLevel {
        Self::level_for_count(Self::completed_category_count(profile, WORDS_PER_CATEGORY))
    }

    /// Recompute the level from scratch and store it on the profile.
    pub fn refresh_level(profile: &mut PlayerProfile) -> PlayerLevel {
        let level = Self::derive_level(profile);
        if level != profile.level() {
            info!("Player {} is now {} (was {})", profile.name(), level, profile.level());
        }
        profile.set_level(level);
        level
    }

    pub fn category_progress(profile: &PlayerProfile, category: Category) -> usize {
        profile.completed_words().count(category)
    }

    pub fn is_category_complete(profile: &PlayerProfile, category: Category) -> bool {
        Self::category_progress(profile, category) >= WORDS_PER_CATEGORY
    }

    pub fn apply_correct_guess(profile: &mut PlayerProfile) {
        profile.add_points(CORRECT_GUESS_POINTS);
    }

    pub fn apply_incorrect_guess(profile: &mut PlayerProfile) {
        profile.deduct_points(INCORRECT_GUESS_PENALTY);
    }

    pub fn apply_outcome(profile: &mut PlayerProfile, outcome: GuessOutcome) {
        match outcome {
            GuessOutcome::Correct => Self::apply_correct_guess(profile),
            GuessOutcome::Incorrect => Self::apply_incorrect_guess(profile),
        }
    }

    /// Record a solved word against its category and re-derive the level.
    pub fn record_win(profile: &mut PlayerProfile, word: &Word) -> PlayerLevel {
        Self::record_completion(profile, word.category(), word.text());
        Self::refresh_level(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_category(profile: &mut PlayerProfile, category: Category, count: usize) {
        for i in 0..count {
            ProgressionPolicy::record_completion(profile, category, &format!("{}-{}", category, i));
        }
    }

    #[test]
    fn test_record_completion_is_idempotent() {
        let mut profile = PlayerProfile::new("ann", 0).unwrap();
        assert!(ProgressionPolicy::record_completion(&mut profile, Category::Jobs, "baker"));
        assert!(!ProgressionPolicy::record_completion(&mut profile, Category::Jobs, "baker"));
        assert_eq!(ProgressionPolicy::category_progress(&profile, Category::Jobs), 1);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(ProgressionPolicy::level_for_count(0), PlayerLevel::Beginner);
        assert_eq!(ProgressionPolicy::level_for_count(1), PlayerLevel::Beginner);
        assert_eq!(ProgressionPolicy::level_for_count(2), PlayerLevel::Intermediate);
        assert_eq!(ProgressionPolicy::level_for_count(3), PlayerLevel::Intermediate);
        assert_eq!(ProgressionPolicy::level_for_count(4), PlayerLevel::Expert);
        assert_eq!(ProgressionPolicy::level_for_count(6), PlayerLevel::Expert);
    }

    #[test]
    fn test_completed_category_count_uses_threshold() {
        let mut profile = PlayerProfile::new("ann", 0).unwrap();
        complete_category(&mut profile, Category::Animals, 10);
        complete_category(&mut profile, Category::Cities, 9);

        assert_eq!(ProgressionPolicy::completed_category_count(&profile, WORDS_PER_CATEGORY), 1);
        assert_eq!(ProgressionPolicy::completed_category_count(&profile, 9), 2);
        assert!(ProgressionPolicy::is_category_complete(&profile, Category::Animals));
        assert!(!ProgressionPolicy::is_category_complete(&profile, Category::Cities));
    }

    #[test]
    fn test_tenth_plants_word_promotes_to_intermediate() {
        let mut profile = PlayerProfile::new("ann", 0).unwrap();
        complete_category(&mut profile, Category::Movies, 10);
        complete_category(&mut profile, Category::Plants, 9);
        assert_eq!(ProgressionPolicy::refresh_level(&mut profile), PlayerLevel::Beginner);

        let level = ProgressionPolicy::record_win(&mut profile, &Word::new("fern", Category::Plants));
        assert_eq!(ProgressionPolicy::completed_category_count(&profile, WORDS_PER_CATEGORY), 2);
        assert_eq!(level, PlayerLevel::Intermediate);
        assert_eq!(profile.level(), PlayerLevel::Intermediate);
    }

    #[test]
    fn test_level_is_recomputed_not_patched() {
        let mut profile = PlayerProfile::new("ann", 0).unwrap();
        profile.set_level(PlayerLevel::Expert);
        assert_eq!(ProgressionPolicy::refresh_level(&mut profile), PlayerLevel::Beginner);
    }

    #[test]
    fn test_score_floor() {
        let mut profile = PlayerProfile::new("ann", 0).unwrap();
        ProgressionPolicy::apply_outcome(&mut profile, GuessOutcome::Correct);
        assert_eq!(profile.score(), 5);
        for _ in 0..6 {
            ProgressionPolicy::apply_outcome(&mut profile, GuessOutcome::Incorrect);
        }
        assert_eq!(profile.score(), 0);
    }
}
