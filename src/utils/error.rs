use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocError {
    #[error("Argument must be an integer: {input}")]
    InvalidGameId { input: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Error on RA call {call} with game id {game_id}: status {status}")]
    UpstreamStatus {
        call: &'static str,
        game_id: u32,
        status: StatusCode,
    },

    #[error("Error on RA call {call} with game id {game_id}: {source}")]
    Decode {
        call: &'static str,
        game_id: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("No game found for id {game_id}")]
    GameNotFound { game_id: u32 },

    #[error("No code notes found for id {game_id}")]
    CodeNotesUnavailable { game_id: u32 },

    #[error("No leaderboards found for id {game_id}")]
    LeaderboardsUnavailable { game_id: u32 },

    #[error("unknown response from {method} {url}, got: {status}")]
    BadgeStatus {
        method: &'static str,
        url: String,
        status: StatusCode,
    },

    #[error("Refusing badge name {name:?}: not a plain file name")]
    InvalidBadgeName { name: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DocError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DocError::InvalidGameId { .. } => "Pass the numeric id from the game's page URL",
            DocError::Http(_) | DocError::UpstreamStatus { .. } => {
                "Check your network connection and that RA_API_KEY holds a valid web API key"
            }
            DocError::Decode { .. } => {
                "The service answered with an unexpected payload; retry later"
            }
            DocError::GameNotFound { .. } => "Double-check the game id",
            DocError::CodeNotesUnavailable { .. } | DocError::LeaderboardsUnavailable { .. } => {
                "The game exists but the service refused the request; check RA_API_KEY"
            }
            DocError::Io(_) => "Check permissions on the output directory",
            DocError::BadgeStatus { .. } => "Badge host returned an unexpected status",
            DocError::InvalidBadgeName { .. } => {
                "The service sent a badge name that cannot be cached"
            }
            DocError::Url(_) | DocError::InvalidConfigValueError { .. } => {
                "Fix the command line options and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_input() {
        let err = DocError::InvalidGameId {
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Argument must be an integer: abc");

        let err = DocError::GameNotFound { game_id: 42 };
        assert_eq!(err.to_string(), "No game found for id 42");
    }

    #[test]
    fn test_badge_status_names_url() {
        let err = DocError::BadgeStatus {
            method: "HEAD",
            url: "https://media.example/Badge/1.png".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        let msg = err.to_string();
        assert!(msg.contains("HEAD https://media.example/Badge/1.png"));
        assert!(msg.contains("500"));
    }
}
