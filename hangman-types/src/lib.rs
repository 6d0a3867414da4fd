pub mod category;
pub mod errors;
pub mod player;
pub mod session;

// Re-export all types
pub use category::*;
pub use errors::*;
pub use player::*;
pub use session::*;

/// Incorrect guesses allowed before a session is lost.
pub const GUESS_BUDGET: u32 = 6;

/// Seconds a session may run before it times out.
pub const TIME_LIMIT_SECONDS: u64 = 180;

/// Completed words needed before a category counts as complete.
pub const WORDS_PER_CATEGORY: usize = 10;

pub const CORRECT_GUESS_POINTS: u32 = 5;
pub const INCORRECT_GUESS_PENALTY: u32 = 2;
