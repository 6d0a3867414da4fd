use hangman_types::{PlayerLevel, PlayerProfile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub score: u32,
    pub level: PlayerLevel,
    pub avatar_id: i32,
}

/// Score ranking over a set of players. Never mutates its input.
pub struct Leaderboard;

impl Leaderboard {
    /// Up to `n` players by descending score. Equal scores keep their input order.
    pub fn top_n(players: &[PlayerProfile], n: usize) -> Vec<&PlayerProfile> {
        let mut ranked: Vec<&PlayerProfile> = players.iter().collect();
        ranked.sort_by(|a, b| b.score().cmp(&a.score()));
        ranked.truncate(n);
        ranked
    }

    /// `top_n` as display rows with 1-based positions.
    pub fn entries(players: &[PlayerProfile], n: usize) -> Vec<LeaderboardEntry> {
        Self::top_n(players, n)
            .into_iter()
            .enumerate()
            .map(|(index, profile)| LeaderboardEntry {
                rank: (index + 1) as u32,
                name: profile.name().to_string(),
                score: profile.score(),
                level: profile.level(),
                avatar_id: profile.avatar_id(),
            })
            .collect()
    }

    /// One plus the number of players with a strictly higher score.
    pub fn rank_of(players: &[PlayerProfile], name: &str) -> Option<u32> {
        let key = PlayerProfile::normalize_name(name)?;
        let player = players.iter().find(|p| p.name() == key)?;
        let above = players.iter().filter(|p| p.score() > player.score()).count();
        Some(above as u32 + 1)
    }
}
