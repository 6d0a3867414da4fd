use hangman_types::Category;
use std::collections::BTreeSet;

/// Placeholder shown for letters that have not been guessed yet.
pub const MASK_CHAR: char = '_';

/// Lower-case a guessed letter the same way for every comparison.
pub fn normalize_letter(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

/// The target word of one session and the letters guessed against it.
///
/// Only alphabetic characters have to be guessed; anything else in the text
/// (hyphens, digits, spaces) counts as revealed from the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    category: Category,
    guessed_letters: BTreeSet<char>,
    incorrect_guesses: u32,
    solved_override: Option<bool>,
}

impl Word {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
            guessed_letters: BTreeSet::new(),
            incorrect_guesses: 0,
            solved_override: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    /// Every incorrect guess counts, including repeats of the same letter.
    pub fn incorrect_guesses(&self) -> u32 {
        self.incorrect_guesses
    }

    /// Record a guess. Returns true if the letter occurs anywhere in the word.
    ///
    /// The guessed-letter set is idempotent but the result is not cached: a
    /// repeated wrong letter is reported (and counted) as wrong again.
    pub fn guess_letter(&mut self, letter: char) -> bool {
        let letter = normalize_letter(letter);
        self.guessed_letters.insert(letter);

        let occurs = self.text.chars().any(|c| normalize_letter(c) == letter);
        if occurs {
            // A real guess supersedes any restored flag
            self.solved_override = None;
        } else {
            self.incorrect_guesses += 1;
        }
        occurs
    }

    pub fn is_letter_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&normalize_letter(letter))
    }

    fn is_revealed(&self, c: char) -> bool {
        !c.is_alphabetic() || self.is_letter_guessed(c)
    }

    /// True once every letter of a non-empty word has been guessed.
    pub fn is_solved(&self) -> bool {
        self.solved_override
            .unwrap_or_else(|| !self.text.is_empty() && self.text.chars().all(|c| self.is_revealed(c)))
    }

    /// Share of the word's characters already revealed, in `[0, 100]`.
    pub fn completion_percentage(&self) -> f64 {
        let total = self.text.chars().count();
        if total == 0 {
            return 0.0;
        }
        let revealed = self.text.chars().filter(|&c| self.is_revealed(c)).count();
        (revealed as f64 * 100.0) / total as f64
    }

    /// The word with unguessed letters replaced by `MASK_CHAR`, original case kept.
    pub fn masked(&self) -> String {
        self.text
            .chars()
            .map(|c| if self.is_revealed(c) { c } else { MASK_CHAR })
            .collect()
    }

    /// Rebuild a word from persisted state. `solved` is kept as an override
    /// until the next correct guess recomputes it.
    pub fn restore(
        text: impl Into<String>,
        category: Category,
        guessed_letters: impl IntoIterator<Item = char>,
        incorrect_guesses: u32,
        solved: bool,
    ) -> Self {
        let mut word = Self::new(text, category);
        word.guessed_letters = guessed_letters.into_iter().map(normalize_letter).collect();
        word.incorrect_guesses = incorrect_guesses;
        if word.is_solved() != solved {
            word.solved_override = Some(solved);
        }
        word
    }
}
