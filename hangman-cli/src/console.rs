//! Text commands and rendering for the terminal front end.

use hangman_core::{GameSession, LeaderboardEntry, ProgressionPolicy};
use hangman_types::{Category, PlayerProfile, SessionStatus, WORDS_PER_CATEGORY};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  register <name> [avatar]  create a player and log in
  login <name>              log in as an existing player
  categories                list categories and your progress
  play <category>           start a game in a category
  <letter> | guess <letter> guess a letter
  status                    show the current board
  save                      save the current game
  load                      resume the last saved game
  leaderboard               show the top players
  reset                     reset your score to zero
  logout                    log out
  quit                      save players and exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register { name: String, avatar_id: i32 },
    Login(String),
    Categories,
    Play(String),
    Guess(char),
    Status,
    Save,
    Load,
    Leaderboard,
    ResetScore,
    Logout,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("Invalid avatar id '{0}'")]
    InvalidAvatar(String),
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let (head, rest) = match input.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (input, ""),
        };

        if head.is_empty() {
            return Err(CommandError::Empty);
        }

        // A lone character is a guess
        let mut chars = head.chars();
        if let (Some(letter), None, true) = (chars.next(), chars.next(), rest.is_empty()) {
            return Ok(Command::Guess(letter));
        }

        match head.to_lowercase().as_str() {
            "register" => {
                let mut args = rest.split_whitespace();
                let name = args.next().ok_or(CommandError::MissingArgument {
                    command: "register",
                    argument: "a name",
                })?;
                let avatar_id = match args.next() {
                    Some(raw) => raw
                        .parse()
                        .map_err(|_| CommandError::InvalidAvatar(raw.to_string()))?,
                    None => 0,
                };
                Ok(Command::Register {
                    name: name.to_string(),
                    avatar_id,
                })
            }
            "login" => required(rest, "login", "a name").map(Command::Login),
            "play" => required(rest, "play", "a category").map(Command::Play),
            "guess" => {
                let mut letters = rest.chars();
                match (letters.next(), letters.next()) {
                    (Some(letter), None) => Ok(Command::Guess(letter)),
                    _ => Err(CommandError::MissingArgument {
                        command: "guess",
                        argument: "a single letter",
                    }),
                }
            }
            "categories" => Ok(Command::Categories),
            "status" => Ok(Command::Status),
            "save" => Ok(Command::Save),
            "load" => Ok(Command::Load),
            "leaderboard" | "scores" => Ok(Command::Leaderboard),
            "reset" => Ok(Command::ResetScore),
            "logout" => Ok(Command::Logout),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(head.to_string())),
        }
    }
}

fn required(rest: &str, command: &'static str, argument: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(rest.to_string())
    }
}

/// Map user input onto a category name, ignoring case. Unknown input is
/// passed through untouched.
pub fn canonical_category(input: &str) -> String {
    Category::PLAYABLE
        .iter()
        .find(|category| category.name().eq_ignore_ascii_case(input.trim()))
        .map(|category| category.name().to_string())
        .unwrap_or_else(|| input.trim().to_string())
}

pub fn render_board(session: &GameSession) -> String {
    let word = session.word();
    let mut guessed: Vec<String> = word
        .guessed_letters()
        .iter()
        .map(|letter| letter.to_string())
        .collect();
    guessed.sort();

    let mut board = format!(
        "{}  [{}]\nGuesses left: {}  Guessed: {}",
        spaced(&word.masked()),
        word.category(),
        session.remaining_guesses(),
        if guessed.is_empty() {
            "-".to_string()
        } else {
            guessed.join(" ")
        }
    );

    if session.time_limit_seconds() > 0 {
        let left = session
            .time_limit_seconds()
            .saturating_sub(session.elapsed_seconds());
        board.push_str(&format!("  Time left: {}:{:02}", left / 60, left % 60));
    }

    match session.status() {
        SessionStatus::Running => {}
        SessionStatus::Over(reason) => {
            board.push_str(&format!("\nGame over ({}). The word was '{}'.", reason, word.text()));
        }
    }
    board
}

fn spaced(masked: &str) -> String {
    masked
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "No players yet.".to_string();
    }
    entries
        .iter()
        .map(|entry| {
            format!(
                "{:>3}. {:<16} {:>6}  {}",
                entry.rank, entry.name, entry.score, entry.level
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_progress(profile: &PlayerProfile) -> String {
    let mut lines = vec![format!(
        "{}: {} points, {}",
        profile.name(),
        profile.score(),
        profile.level()
    )];
    for category in Category::PLAYABLE {
        let done = ProgressionPolicy::category_progress(profile, category);
        let marker = if ProgressionPolicy::is_category_complete(profile, category) {
            " (complete)"
        } else {
            ""
        };
        lines.push(format!(
            "  {:<12} {}/{}{}",
            category.name(),
            done.min(WORDS_PER_CATEGORY),
            WORDS_PER_CATEGORY,
            marker
        ));
    }
    lines.join("\n")
}
