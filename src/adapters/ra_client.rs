use crate::domain::model::{CodeNoteSet, GameId, GameRecord, LeaderboardSet};
use crate::domain::ports::GameDataSource;
use crate::utils::error::{DocError, Result};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

static MY_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// RetroAchievements web API client. The key is sent as the `y` query parameter.
pub struct RaClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl RaClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // `Url::join` replaces the last segment unless the path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client: Client::new(),
            base_url,
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        Ok(url)
    }

    /// Sends a GET request and decodes the body, `None` when the service answers `null`.
    async fn get_json<T>(&self, call: &'static str, game_id: GameId, url: Url) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("RA call {} for game {}", call, game_id);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, MY_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("RA call {} responded with {}", call, status);

        if !status.is_success() {
            return Err(DocError::UpstreamStatus {
                call,
                game_id: game_id.0,
                status,
            });
        }

        // Decoded straight from bytes so keyed maps keep their document order.
        let body = response.bytes().await?;
        serde_json::from_slice::<Option<T>>(&body).map_err(|source| DocError::Decode {
            call,
            game_id: game_id.0,
            source,
        })
    }
}

#[async_trait]
impl GameDataSource for RaClient {
    async fn fetch_game(&self, game_id: GameId) -> Result<GameRecord> {
        let url = self.endpoint(
            "API/API_GetGameExtended.php",
            &[("y", self.api_key.clone()), ("i", game_id.to_string())],
        )?;

        match self.get_json::<GameRecord>("GetGameExtended", game_id, url).await? {
            // An unknown id comes back as `null` or `{}`; both decode without an id.
            Some(game) if game.id != 0 => Ok(game),
            _ => Err(DocError::GameNotFound { game_id: game_id.0 }),
        }
    }

    async fn fetch_code_notes(&self, game_id: GameId) -> Result<CodeNoteSet> {
        let url = self.endpoint(
            "dorequest.php",
            &[
                ("r", "codenotes2".to_string()),
                ("g", game_id.to_string()),
                ("y", self.api_key.clone()),
            ],
        )?;

        match self.get_json::<CodeNoteSet>("GetCodeNotes", game_id, url).await? {
            Some(notes) if notes.success => Ok(notes),
            _ => Err(DocError::CodeNotesUnavailable { game_id: game_id.0 }),
        }
    }

    async fn fetch_leaderboards(&self, game_id: GameId) -> Result<LeaderboardSet> {
        let url = self.endpoint(
            "API/API_GetGameLeaderboards.php",
            &[("y", self.api_key.clone()), ("i", game_id.to_string())],
        )?;

        self.get_json::<LeaderboardSet>("GetGameLeaderboards", game_id, url)
            .await?
            .ok_or(DocError::LeaderboardsUnavailable { game_id: game_id.0 })
    }
}
