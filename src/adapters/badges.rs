use crate::domain::model::Achievement;
use crate::utils::error::{DocError, Result};
use crate::utils::validation::validate_badge_name;
use reqwest::header::USER_AGENT;
use reqwest::{Client, Response, StatusCode};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

static MY_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeOutcome {
    /// File was already on disk; nothing was requested.
    Cached,
    /// The media host answered 403 for this badge.
    Withheld,
    Downloaded(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeReport {
    pub cached: usize,
    pub downloaded: usize,
    pub withheld: usize,
    pub failed: usize,
}

/// Downloads badge images into a directory that doubles as a cross-run cache.
pub struct BadgeFetcher {
    client: Client,
    media_base_url: String,
    dir: PathBuf,
}

impl BadgeFetcher {
    pub fn new(media_base_url: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            client: Client::new(),
            media_base_url: media_base_url.into().trim_end_matches('/').to_string(),
            dir: dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn badge_path(&self, badge_name: &str) -> PathBuf {
        self.dir.join(format!("{}.png", badge_name))
    }

    pub fn badge_url(&self, badge_name: &str) -> String {
        format!("{}/Badge/{}.png", self.media_base_url, badge_name)
    }

    pub async fn fetch(&self, badge_name: &str) -> Result<BadgeOutcome> {
        validate_badge_name(badge_name)?;

        let path = self.badge_path(badge_name);
        if fs::try_exists(&path).await? {
            tracing::debug!("Badge {} already cached at {}", badge_name, path.display());
            return Ok(BadgeOutcome::Cached);
        }

        let url = self.badge_url(badge_name);
        let head = self
            .client
            .head(&url)
            .header(USER_AGENT, MY_USER_AGENT)
            .send()
            .await?;

        match head.status() {
            StatusCode::FORBIDDEN => {
                tracing::debug!("Badge {} is withheld by the media host", badge_name);
                return Ok(BadgeOutcome::Withheld);
            }
            StatusCode::OK => {}
            status => {
                return Err(DocError::BadgeStatus {
                    method: "HEAD",
                    url,
                    status,
                })
            }
        }

        let mut response = self
            .client
            .get(&url)
            .header(USER_AGENT, MY_USER_AGENT)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(DocError::BadgeStatus {
                method: "GET",
                url,
                status: response.status(),
            });
        }

        // Only complete downloads land on `path`; its existence is the cache signal.
        let part = path.with_extension("png.part");
        if let Err(e) = Self::save(&mut response, &self.dir, &part, &path).await {
            if let Err(cleanup) = fs::remove_file(&part).await {
                tracing::debug!("No partial file {} to remove: {}", part.display(), cleanup);
            }
            return Err(e);
        }

        tracing::debug!("Downloaded badge {} to {}", badge_name, path.display());
        Ok(BadgeOutcome::Downloaded(path))
    }

    async fn save(response: &mut Response, dir: &Path, part: &Path, path: &Path) -> Result<()> {
        fs::create_dir_all(dir).await?;
        let mut file = fs::File::create(part).await?;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        drop(file);
        fs::rename(part, path).await?;
        Ok(())
    }

    /// Fetches every badge in order. A failing badge is logged and counted, never fatal.
    pub async fn fetch_all(&self, achievements: &[Achievement]) -> BadgeReport {
        let mut report = BadgeReport::default();

        for achievement in achievements {
            match self.fetch(&achievement.badge_name).await {
                Ok(BadgeOutcome::Cached) => report.cached += 1,
                Ok(BadgeOutcome::Withheld) => report.withheld += 1,
                Ok(BadgeOutcome::Downloaded(_)) => report.downloaded += 1,
                Err(e) => {
                    report.failed += 1;
                    tracing::warn!(
                        "Badge {} for achievement {} not saved: {}",
                        achievement.badge_name,
                        achievement.id,
                        e
                    );
                }
            }
        }

        tracing::info!(
            "Badges: {} downloaded, {} cached, {} withheld, {} failed",
            report.downloaded,
            report.cached,
            report.withheld,
            report.failed
        );
        report
    }
}
