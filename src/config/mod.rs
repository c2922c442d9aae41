use crate::core::ConfigProvider;
use crate::domain::model::GameId;
use crate::utils::error::Result;
use crate::utils::validation::{validate_badge_dir, validate_base_url, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "ra-design-doc")]
#[command(about = "Print a markdown design doc for a RetroAchievements game")]
pub struct CliConfig {
    /// Numeric id of the game
    #[arg(value_name = "GAME_ID")]
    pub game_id: GameId,

    /// Web API key
    #[arg(long, env = "RA_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Directory where badge images are cached
    #[arg(long, default_value = "out/badges")]
    pub badge_dir: PathBuf,

    #[arg(long, default_value = "https://retroachievements.org")]
    pub api_base_url: String,

    #[arg(long, default_value = "https://media.retroachievements.org")]
    pub media_base_url: String,

    /// Render without downloading badge images
    #[arg(long)]
    pub skip_badges: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn media_base_url(&self) -> &str {
        &self.media_base_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn badge_dir(&self) -> &Path {
        &self.badge_dir
    }

    fn fetch_badges(&self) -> bool {
        !self.skip_badges
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_base_url("api_base_url", &self.api_base_url)?;
        validate_base_url("media_base_url", &self.media_base_url)?;
        validate_badge_dir("badge_dir", &self.badge_dir)?;
        Ok(())
    }
}
