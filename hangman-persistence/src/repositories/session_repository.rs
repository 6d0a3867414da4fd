use anyhow::{Context, Result};
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::info;

use crate::entities::{prelude::*, saved_sessions};
use hangman_types::{Category, SavedSession, SessionId};

/// Append-only log of saved sessions. The newest row is the one to resume.
pub struct SessionRepository {
    db: DatabaseConnection,
}

impl SessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_session(model: saved_sessions::Model) -> Result<SavedSession> {
        Ok(SavedSession {
            id: model.session_id,
            category: Category::from_index(model.category),
            guessed_letters: model.guessed_letters.chars().collect(),
            incorrect_guesses: u32::try_from(model.incorrect_guesses)
                .context("Negative incorrect guess count")?,
            solved: model.solved,
            remaining_guesses: u32::try_from(model.remaining_guesses)
                .context("Negative remaining guess count")?,
            time_limit_seconds: u64::try_from(model.time_limit_seconds)
                .context("Negative time limit")?,
            started_at: model.started_at,
            ended_at: model.ended_at,
            saved_at: model.saved_at,
            word: model.word,
        })
    }

    pub async fn save(&self, session: &SavedSession) -> Result<()> {
        let row = saved_sessions::ActiveModel {
            id: ActiveValue::NotSet,
            session_id: ActiveValue::Set(session.id),
            word: ActiveValue::Set(session.word.clone()),
            category: ActiveValue::Set(session.category.index()),
            guessed_letters: ActiveValue::Set(session.guessed_letters.iter().collect()),
            incorrect_guesses: ActiveValue::Set(
                i32::try_from(session.incorrect_guesses).context("Incorrect guess count too large")?,
            ),
            solved: ActiveValue::Set(session.solved),
            remaining_guesses: ActiveValue::Set(
                i32::try_from(session.remaining_guesses).context("Remaining guess count too large")?,
            ),
            time_limit_seconds: ActiveValue::Set(
                i64::try_from(session.time_limit_seconds).context("Time limit too large")?,
            ),
            started_at: ActiveValue::Set(session.started_at),
            ended_at: ActiveValue::Set(session.ended_at),
            saved_at: ActiveValue::Set(session.saved_at),
        };

        SavedSessions::insert(row).exec(&self.db).await?;
        info!("Persisted saved session {}", session.id);
        Ok(())
    }

    /// The most recently saved session, if any.
    pub async fn get_last(&self) -> Result<Option<SavedSession>> {
        let model = SavedSessions::find()
            .order_by_desc(saved_sessions::Column::Id)
            .one(&self.db)
            .await?;

        model.map(Self::model_to_session).transpose()
    }

    /// All saves, oldest first.
    pub async fn list(&self) -> Result<Vec<SavedSession>> {
        SavedSessions::find()
            .order_by_asc(saved_sessions::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Self::model_to_session)
            .collect()
    }

    /// Delete every save of a session that has ended, so it cannot be resumed.
    pub async fn retire(&self, session_id: SessionId) -> Result<u64> {
        let result = SavedSessions::delete_many()
            .filter(saved_sessions::Column::SessionId.eq(session_id))
            .exec(&self.db)
            .await?;
        if result.rows_affected > 0 {
            info!("Retired {} saves of session {}", result.rows_affected, session_id);
        }
        Ok(result.rows_affected)
    }

    pub async fn clear(&self) -> Result<()> {
        SavedSessions::delete_many().exec(&self.db).await?;
        Ok(())
    }
}
