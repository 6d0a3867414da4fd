use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::{Category, GameError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerLevel {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl PlayerLevel {
    pub fn index(&self) -> i32 {
        match self {
            PlayerLevel::Beginner => 0,
            PlayerLevel::Intermediate => 1,
            PlayerLevel::Expert => 2,
        }
    }

    /// Unknown codes fall back to `Beginner`.
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => PlayerLevel::Intermediate,
            2 => PlayerLevel::Expert,
            _ => PlayerLevel::Beginner,
        }
    }
}

impl fmt::Display for PlayerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerLevel::Beginner => f.write_str("Beginner"),
            PlayerLevel::Intermediate => f.write_str("Intermediate"),
            PlayerLevel::Expert => f.write_str("Expert"),
        }
    }
}

/// Completed words per playable category.
///
/// Every playable category always has a (possibly empty) set, so lookups never
/// have to distinguish "missing" from "empty". Words are stored lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedWords {
    by_category: [BTreeSet<String>; 6],
}

impl CompletedWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word. Returns false if it was already recorded or the
    /// category is `Unspecified`.
    pub fn insert(&mut self, category: Category, word: &str) -> bool {
        match category.slot() {
            Some(slot) => self.by_category[slot].insert(word.trim().to_lowercase()),
            None => false,
        }
    }

    pub fn contains(&self, category: Category, word: &str) -> bool {
        self.words(category)
            .is_some_and(|words| words.contains(&word.trim().to_lowercase()))
    }

    pub fn words(&self, category: Category) -> Option<&BTreeSet<String>> {
        category.slot().map(|slot| &self.by_category[slot])
    }

    pub fn count(&self, category: Category) -> usize {
        self.words(category).map_or(0, BTreeSet::len)
    }

    pub fn total(&self) -> usize {
        self.by_category.iter().map(BTreeSet::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &BTreeSet<String>)> {
        Category::PLAYABLE.into_iter().zip(self.by_category.iter())
    }

    pub fn clear(&mut self) {
        for words in &mut self.by_category {
            words.clear();
        }
    }
}

/// A player's persistent identity and progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    name: String,
    level: PlayerLevel,
    score: u32,
    avatar_id: i32,
    last_game_seconds: u64,
    completed_words: CompletedWords,
}

impl PlayerProfile {
    pub fn new(name: &str, avatar_id: i32) -> Result<Self, GameError> {
        let name = Self::normalize_name(name).ok_or(GameError::InvalidPlayerName)?;
        Ok(Self {
            name,
            level: PlayerLevel::Beginner,
            score: 0,
            avatar_id,
            last_game_seconds: 0,
            completed_words: CompletedWords::new(),
        })
    }

    /// Player names are trimmed and upper-cased; blank names are rejected.
    pub fn normalize_name(raw: &str) -> Option<String> {
        let name = raw.trim().to_uppercase();
        (!name.is_empty()).then_some(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> PlayerLevel {
        self.level
    }

    /// Overwrites the level. Normal play derives the level from progress;
    /// this exists for that derivation and for restoring stored profiles.
    pub fn set_level(&mut self, level: PlayerLevel) {
        self.level = level;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Deducts points, stopping at zero.
    pub fn deduct_points(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    pub fn restore_score(&mut self, score: u32) {
        self.score = score;
    }

    pub fn avatar_id(&self) -> i32 {
        self.avatar_id
    }

    pub fn set_avatar_id(&mut self, avatar_id: i32) {
        self.avatar_id = avatar_id;
    }

    pub fn last_game_seconds(&self) -> u64 {
        self.last_game_seconds
    }

    pub fn set_last_game_seconds(&mut self, seconds: u64) {
        self.last_game_seconds = seconds;
    }

    pub fn completed_words(&self) -> &CompletedWords {
        &self.completed_words
    }

    pub fn completed_words_mut(&mut self) -> &mut CompletedWords {
        &mut self.completed_words
    }
}
