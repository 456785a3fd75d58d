use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Sport {
    Baseball,
    Basketball,
    Football,
}

impl Sport {
    pub const ALL: [Sport; 3] = [Sport::Baseball, Sport::Basketball, Sport::Football];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Baseball => "baseball",
            Sport::Basketball => "basketball",
            Sport::Football => "football",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "baseball" => Ok(Sport::Baseball),
            "basketball" => Ok(Sport::Basketball),
            "football" => Ok(Sport::Football),
            other => Err(format!("Unknown sport: {}", other)),
        }
    }
}

/// The player a round asks users to guess. Textual fields are filled in by
/// the scraping pipeline and normalized before the round is stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Player {
    pub name: String,
    pub bio: String,
    pub player_information: String,
    pub draft_information: String,
    pub teams_played_on: String,
    pub jersey_numbers: String,
    pub career_stats: String,
    pub personal_achievements: String,
    pub photo: String,
    pub years_active: String,
    pub initials: String,
    pub nicknames: String,
}

/// One day's challenge for a sport, keyed by `(sport, play_date)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Round {
    pub sport: Sport,
    pub play_date: String, // YYYY-MM-DD
    pub player: Player,
    pub stats: Stats,
}

impl Round {
    pub fn new(sport: Sport, play_date: impl Into<String>, player: Player) -> Self {
        Self {
            sport,
            play_date: play_date.into(),
            player,
            stats: Stats::default(),
        }
    }

    pub fn round_id(&self) -> String {
        format!("{}#{}", self.sport, self.play_date)
    }
}
