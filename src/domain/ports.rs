use crate::domain::model::{CodeNoteSet, GameId, GameRecord, LeaderboardSet};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn media_base_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn badge_dir(&self) -> &Path;
    fn fetch_badges(&self) -> bool;
}

/// Read side of the achievements service.
#[async_trait]
pub trait GameDataSource: Send + Sync {
    async fn fetch_game(&self, game_id: GameId) -> Result<GameRecord>;
    async fn fetch_code_notes(&self, game_id: GameId) -> Result<CodeNoteSet>;
    async fn fetch_leaderboards(&self, game_id: GameId) -> Result<LeaderboardSet>;
}
