use anyhow::{Context, Result};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::entities::{completed_words, players, prelude::*};
use hangman_core::LeaderboardEntry;
use hangman_types::{Category, PlayerLevel, PlayerProfile};

/// Player profiles and their completed words.
pub struct PlayerRepository {
    db: DatabaseConnection,
}

impl PlayerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_profile(
        model: players::Model,
        words: &[completed_words::Model],
    ) -> Result<PlayerProfile> {
        let mut profile = PlayerProfile::new(&model.name, model.avatar_id)
            .with_context(|| format!("Invalid stored player name {:?}", model.name))?;
        profile.set_level(PlayerLevel::from_index(model.level));
        profile.restore_score(
            u32::try_from(model.score)
                .with_context(|| format!("Score out of range for {}", model.name))?,
        );
        profile.set_last_game_seconds(u64::try_from(model.last_game_seconds).unwrap_or(0));
        for row in words {
            profile
                .completed_words_mut()
                .insert(Category::from_index(row.category), &row.word);
        }
        Ok(profile)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<PlayerProfile>> {
        let Some(key) = PlayerProfile::normalize_name(name) else {
            return Ok(None);
        };

        let player_model = Players::find()
            .filter(players::Column::Name.eq(key))
            .one(&self.db)
            .await?;

        match player_model {
            Some(model) => {
                let words = CompletedWords::find()
                    .filter(completed_words::Column::PlayerId.eq(model.id))
                    .all(&self.db)
                    .await?;
                Ok(Some(Self::model_to_profile(model, &words)?))
            }
            None => Ok(None),
        }
    }

    /// Every stored player in registration order.
    pub async fn list_players(&self) -> Result<Vec<PlayerProfile>> {
        let models = Players::find()
            .order_by_asc(players::Column::Id)
            .all(&self.db)
            .await?;

        let mut words_by_player: HashMap<i32, Vec<completed_words::Model>> = HashMap::new();
        for row in CompletedWords::find().all(&self.db).await? {
            words_by_player.entry(row.player_id).or_default().push(row);
        }

        models
            .into_iter()
            .map(|model| {
                let words = words_by_player.remove(&model.id).unwrap_or_default();
                Self::model_to_profile(model, &words)
            })
            .collect()
    }

    /// Insert or update a profile. The stored completed words are replaced by
    /// the profile's current set.
    pub async fn save_profile(&self, profile: &PlayerProfile) -> Result<()> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let existing = Players::find()
            .filter(players::Column::Name.eq(profile.name()))
            .one(&txn)
            .await?;

        let player_id = match existing {
            Some(model) => {
                let mut player: players::ActiveModel = model.into();
                player.level = ActiveValue::Set(profile.level().index());
                player.score = ActiveValue::Set(i64::from(profile.score()));
                player.avatar_id = ActiveValue::Set(profile.avatar_id());
                player.last_game_seconds =
                    ActiveValue::Set(i64::try_from(profile.last_game_seconds()).unwrap_or(i64::MAX));
                player.updated_at = ActiveValue::Set(now);
                player.update(&txn).await?.id
            }
            None => {
                let player = players::ActiveModel {
                    id: ActiveValue::NotSet,
                    name: ActiveValue::Set(profile.name().to_string()),
                    level: ActiveValue::Set(profile.level().index()),
                    score: ActiveValue::Set(i64::from(profile.score())),
                    avatar_id: ActiveValue::Set(profile.avatar_id()),
                    last_game_seconds: ActiveValue::Set(
                        i64::try_from(profile.last_game_seconds()).unwrap_or(i64::MAX),
                    ),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                };
                Players::insert(player).exec(&txn).await?.last_insert_id
            }
        };

        CompletedWords::delete_many()
            .filter(completed_words::Column::PlayerId.eq(player_id))
            .exec(&txn)
            .await?;

        let rows: Vec<completed_words::ActiveModel> = profile
            .completed_words()
            .iter()
            .flat_map(|(category, words)| {
                words.iter().map(move |word| completed_words::ActiveModel {
                    id: ActiveValue::NotSet,
                    player_id: ActiveValue::Set(player_id),
                    category: ActiveValue::Set(category.index()),
                    word: ActiveValue::Set(word.clone()),
                })
            })
            .collect();
        let word_count = rows.len();
        if !rows.is_empty() {
            CompletedWords::insert_many(rows).exec(&txn).await?;
        }

        txn.commit().await?;
        debug!(
            "Saved player {} (score {}, {} completed words)",
            profile.name(),
            profile.score(),
            word_count
        );
        Ok(())
    }

    pub async fn save_all(&self, profiles: &[PlayerProfile]) -> Result<()> {
        for profile in profiles {
            self.save_profile(profile).await?;
        }
        Ok(())
    }

    /// Delete every player and their completed words.
    pub async fn clear(&self) -> Result<()> {
        let words = CompletedWords::delete_many().exec(&self.db).await?;
        let players = Players::delete_many().exec(&self.db).await?;
        info!(
            "Cleared {} players and {} completed words",
            players.rows_affected, words.rows_affected
        );
        Ok(())
    }

    /// Top `limit` players by score. Ties keep registration order.
    pub async fn get_leaderboard(&self, limit: u64) -> Result<Vec<LeaderboardEntry>> {
        let models = Players::find()
            .order_by_desc(players::Column::Score)
            .order_by_asc(players::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?;

        let leaderboard = models
            .into_iter()
            .enumerate()
            .map(|(index, model)| LeaderboardEntry {
                rank: (index + 1) as u32,
                score: u32::try_from(model.score).unwrap_or(0),
                level: PlayerLevel::from_index(model.level),
                avatar_id: model.avatar_id,
                name: model.name,
            })
            .collect();

        Ok(leaderboard)
    }

    pub async fn get_player_rank(&self, name: &str) -> Result<Option<u32>> {
        let Some(key) = PlayerProfile::normalize_name(name) else {
            return Ok(None);
        };
        let player = Players::find()
            .filter(players::Column::Name.eq(key))
            .one(&self.db)
            .await?;

        if let Some(player_model) = player {
            let players_above = Players::find()
                .filter(players::Column::Score.gt(player_model.score))
                .count(&self.db)
                .await?;

            Ok(Some(players_above as u32 + 1))
        } else {
            Ok(None)
        }
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Players::find().count(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_to_memory_database;
    use migration::{Migrator, MigratorTrait};

    async fn setup_test_db() -> PlayerRepository {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        PlayerRepository::new(db)
    }

    fn player(name: &str, score: u32) -> PlayerProfile {
        let mut profile = PlayerProfile::new(name, 1).unwrap();
        profile.restore_score(score);
        profile
    }

    #[tokio::test]
    async fn test_save_and_find_player() {
        let repo = setup_test_db().await;

        let mut profile = player("alice", 42);
        profile.set_level(PlayerLevel::Intermediate);
        profile.set_last_game_seconds(73);
        profile.completed_words_mut().insert(Category::Animals, "cat");
        profile.completed_words_mut().insert(Category::Movies, "jaws");

        repo.save_profile(&profile).await.unwrap();

        let found = repo.find_by_name("Alice").await.unwrap().unwrap();
        assert_eq!(found, profile);
        assert!(repo.find_by_name("bob").await.unwrap().is_none());
        assert!(repo.find_by_name("   ").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_updates_existing_player() {
        let repo = setup_test_db().await;

        let mut profile = player("carol", 10);
        profile.completed_words_mut().insert(Category::Plants, "fern");
        repo.save_profile(&profile).await.unwrap();

        profile.add_points(5);
        profile.completed_words_mut().clear();
        profile.completed_words_mut().insert(Category::Cities, "paris");
        repo.save_profile(&profile).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let found = repo.find_by_name("carol").await.unwrap().unwrap();
        assert_eq!(found.score(), 15);
        assert!(!found.completed_words().contains(Category::Plants, "fern"));
        assert!(found.completed_words().contains(Category::Cities, "paris"));
    }

    #[tokio::test]
    async fn test_list_players_in_registration_order() {
        let repo = setup_test_db().await;
        let profiles = vec![player("zed", 1), player("amy", 2), player("max", 3)];
        repo.save_all(&profiles).await.unwrap();

        let names: Vec<String> = repo
            .list_players()
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["ZED", "AMY", "MAX"]);
    }

    #[tokio::test]
    async fn test_leaderboard() {
        let repo = setup_test_db().await;
        let profiles = vec![
            player("one", 100),
            player("two", 200),
            player("three", 50),
            player("four", 100),
        ];
        repo.save_all(&profiles).await.unwrap();

        let leaderboard = repo.get_leaderboard(3).await.unwrap();
        assert_eq!(leaderboard.len(), 3);

        assert_eq!(leaderboard[0].name, "TWO");
        assert_eq!(leaderboard[0].rank, 1);
        assert_eq!(leaderboard[1].name, "ONE");
        assert_eq!(leaderboard[1].rank, 2);
        assert_eq!(leaderboard[2].name, "FOUR");
        assert_eq!(leaderboard[2].score, 100);
    }

    #[tokio::test]
    async fn test_player_rank() {
        let repo = setup_test_db().await;
        repo.save_all(&[player("one", 100), player("two", 200), player("three", 100)])
            .await
            .unwrap();

        assert_eq!(repo.get_player_rank("two").await.unwrap(), Some(1));
        assert_eq!(repo.get_player_rank("one").await.unwrap(), Some(2));
        assert_eq!(repo.get_player_rank("three").await.unwrap(), Some(2));
        assert_eq!(repo.get_player_rank("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear() {
        let repo = setup_test_db().await;
        let mut profile = player("dora", 5);
        profile.completed_words_mut().insert(Category::Jobs, "nurse");
        repo.save_profile(&profile).await.unwrap();

        repo.clear().await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.list_players().await.unwrap().is_empty());
    }
}
