use hangman_types::{Category, GameError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub text: String,
    pub category: Category,
}

impl CatalogEntry {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// Source of playable words. The engine only ever reads through it.
pub trait WordCatalog {
    fn all_words(&self) -> &[CatalogEntry];
}

/// Word catalog held in memory, optionally parsed from a word list.
///
/// Word lists hold one `<word> <category-index>` pair per line. Blank lines
/// and lines starting with `#` are ignored.
#[derive(Debug, Clone, Default)]
pub struct MemoryWordCatalog {
    words: Vec<CatalogEntry>,
}

impl MemoryWordCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            words: entries.into_iter().collect(),
        }
    }

    /// Build a catalog from word list text, skipping malformed lines.
    pub fn from_word_list(word_list: &str) -> Self {
        let mut catalog = Self::new();
        catalog.extend_from_word_list(word_list);
        catalog
    }

    /// Append every valid entry of `word_list`. Returns how many were added.
    pub fn extend_from_word_list(&mut self, word_list: &str) -> usize {
        let before = self.words.len();
        for (index, line) in word_list.lines().enumerate() {
            match Self::parse_line(index + 1, line) {
                Ok(Some(entry)) => self.words.push(entry),
                Ok(None) => {}
                Err(e) => warn!("Skipping word list entry: {}", e),
            }
        }
        self.words.len() - before
    }

    /// Parse one word list line. `Ok(None)` for blank lines and comments.
    pub fn parse_line(line_number: usize, line: &str) -> Result<Option<CatalogEntry>, GameError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let invalid = |reason: &str| GameError::InvalidWordEntry {
            line: line_number,
            reason: reason.to_string(),
        };

        let mut parts = line.split_whitespace();
        let (Some(text), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid("expected `<word> <category-index>`"));
        };
        let code: i32 = code
            .parse()
            .map_err(|_| invalid("category index is not a number"))?;

        Ok(Some(CatalogEntry::new(text, Category::from_index(code))))
    }

    /// Render the catalog back into word list text.
    pub fn to_word_list(&self) -> String {
        self.words
            .iter()
            .map(|entry| format!("{} {}\n", entry.text, entry.category.index()))
            .collect()
    }

    pub fn add_word(&mut self, text: impl Into<String>, category: Category) {
        self.words.push(CatalogEntry::new(text, category));
    }

    /// Any word from the catalog, or `None` when it is empty.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&CatalogEntry> {
        if self.words.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.words.len());
        self.words.get(index)
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.words.iter().filter(|w| w.category == category).count()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordCatalog for MemoryWordCatalog {
    fn all_words(&self) -> &[CatalogEntry] {
        &self.words
    }
}
