use crate::adapters::badges::BadgeFetcher;
use crate::core::markdown::Document;
use crate::core::order::sorted_by_display_order;
use crate::core::render::render;
use crate::domain::model::GameId;
use crate::domain::ports::{ConfigProvider, GameDataSource};
use crate::utils::error::Result;

/// Drives one run: fetch, order, cache badges, render.
pub struct DesignDocEngine<S: GameDataSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: GameDataSource, C: ConfigProvider> DesignDocEngine<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    pub async fn run(&self, game_id: GameId) -> Result<Document> {
        tracing::info!("Fetching game {}", game_id);
        let game = self.source.fetch_game(game_id).await?;
        tracing::info!(
            "Found '{}' with {} achievements",
            game.title,
            game.achievements.len()
        );

        let code_notes = self.source.fetch_code_notes(game_id).await?;
        tracing::info!("Fetched {} code notes", code_notes.code_notes.len());

        let leaderboards = self.source.fetch_leaderboards(game_id).await?;
        tracing::info!("Fetched {} leaderboards", leaderboards.results.len());

        let achievements = sorted_by_display_order(&game.achievements);

        if self.config.fetch_badges() {
            let fetcher = BadgeFetcher::new(self.config.media_base_url(), self.config.badge_dir());
            tracing::debug!("Caching badges under {}", fetcher.dir().display());
            fetcher.fetch_all(&achievements).await;
        } else {
            tracing::info!("Skipping badge download");
        }

        Ok(render(&game, &achievements, &code_notes, &leaderboards))
    }
}
