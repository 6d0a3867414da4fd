use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Category, GameOverReason};

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("no unused word left in category {category}")]
    NoWordAvailable { category: Category },
    #[error("no game session is active")]
    NoActiveSession,
    #[error("the game session is already over ({reason})")]
    SessionOver { reason: GameOverReason },
    #[error("letter '{letter}' is not alphabetic")]
    InvalidLetter { letter: char },
    #[error("player name must not be empty")]
    InvalidPlayerName,
    #[error("player name {name} is already taken")]
    PlayerAlreadyExists { name: String },
    #[error("player {name} not found")]
    PlayerNotFound { name: String },
    #[error("invalid word list entry on line {line}: {reason}")]
    InvalidWordEntry { line: usize, reason: String },
}
