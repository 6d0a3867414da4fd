use anyhow::{Context, Result, bail};
use hangman_core::{
    GameEvent, GameEventHandler, Leaderboard, MemoryPlayerStore, MemorySessionStore,
    MemoryWordCatalog, PlayerStore, ProgressionPolicy, SessionCoordinator, SessionStore,
    WordSession,
};
use hangman_persistence::DatabaseManager;
use hangman_types::{Category, GameError, PlayerProfile, SessionStatus};
use tracing::{info, warn};

use crate::config::Config;
use crate::console::{self, Command};

/// What the front end should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Message(text) | Reply::Exit(text) => text,
        }
    }
}

/// Logs finished sessions.
struct SessionLog;

impl GameEventHandler for SessionLog {
    fn handle_event(&mut self, event: GameEvent) {
        if let GameEvent::SessionEnded {
            session_id,
            reason,
            word,
            elapsed_seconds,
        } = event
        {
            info!(
                "Session {} ended ({}) on '{}' after {}s",
                session_id, reason, word, elapsed_seconds
            );
        }
    }
}

/// One terminal game: a coordinator, the player registry and the database
/// they are persisted to.
pub struct App {
    config: Config,
    db: DatabaseManager,
    coordinator: SessionCoordinator,
    players: MemoryPlayerStore,
    player: Option<String>,
}

impl App {
    /// Seed the in-memory stores from the database.
    pub async fn start(config: Config, db: DatabaseManager, catalog: MemoryWordCatalog) -> Result<Self> {
        let profiles = db
            .players()
            .list_players()
            .await
            .context("Failed to load players")?;
        let last_saved = db
            .sessions()
            .get_last()
            .await
            .context("Failed to load saved session")?;

        info!(
            "Loaded {} players and {} words",
            profiles.len(),
            catalog.len()
        );

        let mut coordinator = SessionCoordinator::new(
            WordSession::new(Box::new(catalog)),
            Box::new(MemorySessionStore::with_sessions(last_saved)),
        );
        coordinator.add_event_handler(Box::new(SessionLog));

        Ok(Self {
            config,
            db,
            coordinator,
            players: MemoryPlayerStore::with_players(profiles),
            player: None,
        })
    }

    pub fn current_player(&self) -> Option<&PlayerProfile> {
        self.player.as_deref().and_then(|name| self.players.find(name))
    }

    pub fn coordinator(&self) -> &SessionCoordinator {
        &self.coordinator
    }

    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }

    pub async fn handle(&mut self, command: Command) -> Result<Reply> {
        let text = match command {
            Command::Help => console::HELP.to_string(),
            Command::Register { name, avatar_id } => self.register(&name, avatar_id).await?,
            Command::Login(name) => self.login(&name),
            Command::Categories => match self.current_player() {
                Some(profile) => console::render_progress(profile),
                None => Category::PLAYABLE
                    .iter()
                    .map(|category| category.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            },
            Command::Play(category) => self.play(&category)?,
            Command::Guess(letter) => self.guess(letter).await?,
            Command::Status => match self.coordinator.current_session() {
                Some(session) => console::render_board(session),
                None => "No game in progress.".to_string(),
            },
            Command::Save => self.save().await?,
            Command::Load => self.load().await?,
            Command::Leaderboard => self.leaderboard(),
            Command::ResetScore => self.reset_score().await?,
            Command::Logout => self.logout().await?,
            Command::Quit => {
                self.persist_players().await?;
                return Ok(Reply::Exit("Goodbye!".to_string()));
            }
        };
        Ok(Reply::Message(text))
    }

    async fn register(&mut self, name: &str, avatar_id: i32) -> Result<String> {
        let profile = match self.players.register(name, avatar_id) {
            Ok(profile) => profile.clone(),
            Err(e) => return Ok(e.to_string()),
        };
        self.db.players().save_profile(&profile).await?;
        self.player = Some(profile.name().to_string());
        Ok(format!("Welcome, {}!", profile.name()))
    }

    fn login(&mut self, name: &str) -> String {
        match self.players.login(name) {
            Ok(profile) => {
                let greeting = format!(
                    "Welcome back, {} ({}, {} points).",
                    profile.name(),
                    profile.level(),
                    profile.score()
                );
                self.player = Some(profile.name().to_string());
                greeting
            }
            Err(e) => e.to_string(),
        }
    }

    fn logged_in(&self) -> Result<String> {
        match &self.player {
            Some(name) => Ok(name.clone()),
            None => bail!("Log in or register first."),
        }
    }

    fn play(&mut self, input: &str) -> Result<String> {
        let name = self.logged_in()?;
        let Some(profile) = self.players.find(&name) else {
            bail!("Player {} is no longer registered", name);
        };

        let category_name = console::canonical_category(input);
        let category = Category::from_name(&category_name);
        if category.is_playable() && ProgressionPolicy::is_category_complete(profile, category) {
            return Ok(format!("You have completed every {} word.", category));
        }

        Ok(match self.coordinator.start_new_game_for(profile, &category_name) {
            Ok(session) => console::render_board(session),
            Err(GameError::NoWordAvailable { category }) => {
                format!("No words left in {}.", category)
            }
            Err(e) => e.to_string(),
        })
    }

    async fn guess(&mut self, letter: char) -> Result<String> {
        let name = self.logged_in()?;
        let Some(profile) = self.players.find_mut(&name) else {
            bail!("Player {} is no longer registered", name);
        };

        let report = match self.coordinator.make_guess_for(profile, letter) {
            Ok(report) => report,
            Err(e @ GameError::SessionOver { .. }) => {
                let snapshot = profile.clone();
                self.db.players().save_profile(&snapshot).await?;
                self.retire_finished().await?;
                return Ok(e.to_string());
            }
            Err(e) => return Ok(e.to_string()),
        };

        let mut text = match self.coordinator.current_session() {
            Some(session) => console::render_board(session),
            None => report.masked_word.clone(),
        };
        text.push_str(&format!("\nScore: {} ({:+})", profile.score(), report.score_delta));

        if let SessionStatus::Over(_) = report.status {
            let snapshot = profile.clone();
            self.db.players().save_profile(&snapshot).await?;
            self.retire_finished().await?;
        }
        Ok(text)
    }

    async fn save(&mut self) -> Result<String> {
        self.logged_in()?;
        match self.coordinator.save_current_game() {
            Ok(session_id) => {
                if let Some(saved) = self.coordinator.store().last() {
                    self.db.sessions().save(&saved).await?;
                }
                Ok(format!("Saved game {}.", session_id))
            }
            Err(e) => {
                self.retire_finished().await?;
                Ok(e.to_string())
            }
        }
    }

    async fn load(&mut self) -> Result<String> {
        self.logged_in()?;
        let pending = self.coordinator.store().last().map(|saved| saved.id);
        let text = match self.coordinator.load_last_game() {
            Some(session) => console::render_board(session),
            None => {
                // A save of an already won word is discarded by the coordinator
                if let Some(session_id) = pending {
                    self.db.sessions().retire(session_id).await?;
                }
                return Ok("No saved game.".to_string());
            }
        };
        self.retire_finished().await?;
        Ok(text)
    }

    /// Drop the database saves of the current session once it is over.
    async fn retire_finished(&self) -> Result<()> {
        if let Some(session) = self.coordinator.current_session() {
            if session.is_game_over() {
                self.db.sessions().retire(session.id()).await?;
            }
        }
        Ok(())
    }

    fn leaderboard(&self) -> String {
        let entries = Leaderboard::entries(self.players.list(), self.config.leaderboard_size);
        let mut text = console::render_leaderboard(&entries);
        let rank = self
            .player
            .as_deref()
            .and_then(|name| Leaderboard::rank_of(self.players.list(), name));
        if let Some(rank) = rank {
            text.push_str(&format!("\nYour rank: {}", rank));
        }
        text
    }

    async fn reset_score(&mut self) -> Result<String> {
        let name = self.logged_in()?;
        let Some(profile) = self.players.find_mut(&name) else {
            bail!("Player {} is no longer registered", name);
        };
        profile.reset_score();
        let snapshot = profile.clone();
        self.db.players().save_profile(&snapshot).await?;
        Ok("Score reset to 0.".to_string())
    }

    async fn logout(&mut self) -> Result<String> {
        let Some(name) = self.player.take() else {
            return Ok("Nobody is logged in.".to_string());
        };
        if self.coordinator.abandon_current().is_some() {
            warn!("Unsaved game abandoned on logout");
        }
        if let Some(profile) = self.players.find(&name) {
            self.db.players().save_profile(profile).await?;
        }
        Ok(format!("Goodbye, {}.", name))
    }

    /// Write every known player back to the database.
    pub async fn persist_players(&self) -> Result<()> {
        self.db
            .players()
            .save_all(self.players.list())
            .await
            .context("Failed to save players")
    }
}
