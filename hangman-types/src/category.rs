use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of word categories.
///
/// The six playable categories come first, in the order used by word list
/// files and persisted progress. `Unspecified` is the catch-all for malformed
/// input and is never offered for play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Animals,
    Plants,
    Technology,
    Cities,
    Jobs,
    Movies,
    Unspecified,
}

impl Category {
    /// Every category a player can pick, in index order.
    pub const PLAYABLE: [Category; 6] = [
        Category::Animals,
        Category::Plants,
        Category::Technology,
        Category::Cities,
        Category::Jobs,
        Category::Movies,
    ];

    /// Match a category by its exact (case-sensitive) name.
    /// Anything unrecognized maps to `Unspecified`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Animals" => Category::Animals,
            "Plants" => Category::Plants,
            "Technology" => Category::Technology,
            "Cities" => Category::Cities,
            "Jobs" => Category::Jobs,
            "Movies" => Category::Movies,
            _ => Category::Unspecified,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Animals => "Animals",
            Category::Plants => "Plants",
            Category::Technology => "Technology",
            Category::Cities => "Cities",
            Category::Jobs => "Jobs",
            Category::Movies => "Movies",
            Category::Unspecified => "Unspecified",
        }
    }

    /// Position in `PLAYABLE`, or `None` for `Unspecified`.
    pub fn slot(&self) -> Option<usize> {
        Self::PLAYABLE.iter().position(|c| c == self)
    }

    /// Numeric code used by word list files and the database (0..=6).
    pub fn index(&self) -> i32 {
        self.slot().map(|slot| slot as i32).unwrap_or(6)
    }

    pub fn from_index(index: i32) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|slot| Self::PLAYABLE.get(slot).copied())
            .unwrap_or(Category::Unspecified)
    }

    pub fn is_playable(&self) -> bool {
        self.slot().is_some()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
