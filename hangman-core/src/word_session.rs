use hangman_types::{
    CORRECT_GUESS_POINTS, Category, GameError, GuessOutcome, INCORRECT_GUESS_PENALTY,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, warn};

use crate::{Word, WordCatalog};

/// Picks words from a catalog and routes letter guesses to them.
///
/// Keeps its own running score and a set of words already used by this
/// session, which are never picked again.
pub struct WordSession {
    catalog: Box<dyn WordCatalog>,
    used_words: HashSet<String>,
    score: u32,
    rng: StdRng,
}

impl WordSession {
    pub fn new(catalog: Box<dyn WordCatalog>) -> Self {
        Self::with_rng(catalog, StdRng::from_os_rng())
    }

    /// Deterministic word selection, for tests and replays.
    pub fn with_seed(catalog: Box<dyn WordCatalog>, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Box<dyn WordCatalog>, rng: StdRng) -> Self {
        Self {
            catalog,
            used_words: HashSet::new(),
            score: 0,
            rng,
        }
    }

    /// Pick a word of `category` uniformly among those not used by this
    /// session and not listed in `exclude` (compared case-insensitively).
    pub fn start_new_game(
        &mut self,
        category: Category,
        exclude: &BTreeSet<String>,
    ) -> Result<Word, GameError> {
        let excluded: HashSet<String> = exclude.iter().map(|w| w.to_lowercase()).collect();

        let candidates: Vec<_> = self
            .catalog
            .all_words()
            .iter()
            .filter(|entry| category.is_playable() && entry.category == category)
            .filter(|entry| {
                let key = entry.text.to_lowercase();
                !excluded.contains(&key) && !self.used_words.contains(&key)
            })
            .collect();

        if candidates.is_empty() {
            warn!("No unused words left in category {}", category);
            return Err(GameError::NoWordAvailable { category });
        }

        let entry = candidates[self.rng.random_range(0..candidates.len())];
        debug!(
            "Picked a {}-letter word from {} ({} candidates)",
            entry.text.chars().count(),
            category,
            candidates.len()
        );
        Ok(Word::new(entry.text.clone(), entry.category))
    }

    /// Apply a guess to `word`: +5 when correct, -2 (floored at zero) when not.
    pub fn make_guess(&mut self, word: &mut Word, letter: char) -> GuessOutcome {
        if word.guess_letter(letter) {
            self.score = self.score.saturating_add(CORRECT_GUESS_POINTS);
            GuessOutcome::Correct
        } else {
            self.score = self.score.saturating_sub(INCORRECT_GUESS_PENALTY);
            GuessOutcome::Incorrect
        }
    }

    pub fn masked_word(&self, word: &Word) -> String {
        word.masked()
    }

    pub fn mark_used(&mut self, word: &Word) {
        self.used_words.insert(word.text().to_lowercase());
    }

    pub fn is_used(&self, text: &str) -> bool {
        self.used_words.contains(&text.to_lowercase())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
