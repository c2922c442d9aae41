use crate::utils::error::DocError;
use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric game identifier as used by the RetroAchievements site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u32);

impl FromStr for GameId {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(GameId).map_err(|_| DocError::InvalidGameId {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameRecord {
    #[serde(rename = "ID", default)]
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "ForumTopicID", default)]
    pub forum_topic_id: Option<u32>,
    #[serde(default, deserialize_with = "achievements_in_document_order")]
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Achievement {
    #[serde(rename = "ID", default)]
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub badge_name: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub display_order: i32,
    #[serde(rename = "type", default, deserialize_with = "empty_as_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeNote {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeNoteSet {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub code_notes: Vec<CodeNote>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Leaderboard {
    #[serde(rename = "ID", default)]
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LeaderboardSet {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub results: Vec<Leaderboard>,
}

// The service keys achievements by id in a JSON object, but sends `[]` for a
// game without any. Map entries are collected in the order they appear.
fn achievements_in_document_order<'de, D>(deserializer: D) -> Result<Vec<Achievement>, D::Error>
where
    D: Deserializer<'de>,
{
    struct AchievementsVisitor;

    impl<'de> Visitor<'de> for AchievementsVisitor {
        type Value = Vec<Achievement>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map or list of achievements")
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut achievements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(achievement) = seq.next_element()? {
                achievements.push(achievement);
            }
            Ok(achievements)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut achievements = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((_, achievement)) = map.next_entry::<String, Achievement>()? {
                achievements.push(achievement);
            }
            Ok(achievements)
        }
    }

    deserializer.deserialize_any(AchievementsVisitor)
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
