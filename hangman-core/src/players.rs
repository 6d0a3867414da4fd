use hangman_types::{GameError, PlayerProfile};
use tracing::{info, warn};

use crate::ProgressionPolicy;

/// Registry of player profiles, keyed by normalized (upper-cased) name.
pub trait PlayerStore {
    /// Add a profile. Fails if a profile with the same name exists.
    fn insert(&mut self, profile: PlayerProfile) -> Result<&mut PlayerProfile, GameError>;

    fn find(&self, name: &str) -> Option<&PlayerProfile>;

    fn find_mut(&mut self, name: &str) -> Option<&mut PlayerProfile>;

    /// All profiles in the order they were added.
    fn list(&self) -> &[PlayerProfile];

    fn clear(&mut self);

    /// Create a brand new player.
    fn register(&mut self, name: &str, avatar_id: i32) -> Result<&mut PlayerProfile, GameError> {
        let mut profile = PlayerProfile::new(name, avatar_id)?;
        if self.find(profile.name()).is_some() {
            return Err(GameError::PlayerAlreadyExists {
                name: profile.name().to_string(),
            });
        }
        ProgressionPolicy::refresh_level(&mut profile);
        info!("Registered new player {}", profile.name());
        self.insert(profile)
    }

    /// Log in as an existing player, re-deriving their level.
    fn login(&mut self, name: &str) -> Result<&mut PlayerProfile, GameError> {
        let key = PlayerProfile::normalize_name(name).ok_or(GameError::InvalidPlayerName)?;
        let profile = self
            .find_mut(&key)
            .ok_or(GameError::PlayerNotFound { name: key })?;
        ProgressionPolicy::refresh_level(profile);
        info!("Player {} logged in", profile.name());
        Ok(profile)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPlayerStore {
    players: Vec<PlayerProfile>,
}

impl MemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a store from previously persisted profiles. Later duplicates
    /// of a name are dropped.
    pub fn with_players(players: impl IntoIterator<Item = PlayerProfile>) -> Self {
        let mut store = Self::new();
        for profile in players {
            if let Err(e) = store.insert(profile) {
                warn!("Skipping stored player: {}", e);
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl PlayerStore for MemoryPlayerStore {
    fn insert(&mut self, profile: PlayerProfile) -> Result<&mut PlayerProfile, GameError> {
        if self.find(profile.name()).is_some() {
            return Err(GameError::PlayerAlreadyExists {
                name: profile.name().to_string(),
            });
        }
        self.players.push(profile);
        let index = self.players.len() - 1;
        Ok(&mut self.players[index])
    }

    fn find(&self, name: &str) -> Option<&PlayerProfile> {
        let key = PlayerProfile::normalize_name(name)?;
        self.players.iter().find(|p| p.name() == key)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut PlayerProfile> {
        let key = PlayerProfile::normalize_name(name)?;
        self.players.iter_mut().find(|p| p.name() == key)
    }

    fn list(&self) -> &[PlayerProfile] {
        &self.players
    }

    fn clear(&mut self) {
        self.players.clear();
    }
}
