use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::{Sport, Stats};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: String,
    pub username: String,
    pub current_daily_streak: u32,
    /// The user's local calendar day (YYYY-MM-DD) of their last play.
    pub last_day_played: String,
    pub total_plays: u32,
    pub total_wins: u32,
    pub total_days_played: u32,
    /// Offset from UTC, in minutes, of the user's declared time zone.
    pub utc_offset_minutes: i32,
    pub sports: Vec<UserSportStats>,
    pub story_missions: Vec<StoryMission>,
    pub created_at: String, // ISO 8601 string
}

impl User {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        story_missions: Vec<StoryMission>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            current_daily_streak: 0,
            last_day_played: String::new(),
            total_plays: 0,
            total_wins: 0,
            total_days_played: 0,
            utc_offset_minutes: 0,
            sports: Vec::new(),
            story_missions,
            created_at: created_at.into(),
        }
    }

    pub fn sport_stats(&self, sport: Sport) -> Option<&UserSportStats> {
        self.sports.iter().find(|entry| entry.sport == sport)
    }

    /// Returns the per-sport entry, creating a zero-valued one on first use.
    pub fn sport_stats_mut(&mut self, sport: Sport) -> &mut UserSportStats {
        let index = match self.sports.iter().position(|entry| entry.sport == sport) {
            Some(index) => index,
            None => {
                self.sports.push(UserSportStats::new(sport));
                self.sports.len() - 1
            }
        };
        &mut self.sports[index]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserSportStats {
    pub sport: Sport,
    pub stats: Stats,
    /// Most recent plays first.
    pub history: Vec<RoundHistory>,
}

impl UserSportStats {
    pub fn new(sport: Sport) -> Self {
        Self {
            sport,
            stats: Stats::default(),
            history: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RoundHistory {
    pub play_date: String,
    pub player_name: String,
    pub score: u32,
    pub is_correct: bool,
    pub incorrect_guesses: u32,
    pub flipped_tiles: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum MissionCriteria {
    DaysPlayed(u32),
    Wins(u32),
    DailyStreak(u32),
    PerfectScore,
    NearPerfectScore,
    ZeroScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum MissionCategory {
    DaysPlayed,
    Wins,
    DailyStreak,
    Score,
}

impl MissionCriteria {
    pub fn category(&self) -> MissionCategory {
        match self {
            MissionCriteria::DaysPlayed(_) => MissionCategory::DaysPlayed,
            MissionCriteria::Wins(_) => MissionCategory::Wins,
            MissionCriteria::DailyStreak(_) => MissionCategory::DailyStreak,
            MissionCriteria::PerfectScore
            | MissionCriteria::NearPerfectScore
            | MissionCriteria::ZeroScore => MissionCategory::Score,
        }
    }
}

impl fmt::Display for MissionCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionCriteria::DaysPlayed(days) => write!(f, "Play on {} different days", days),
            MissionCriteria::Wins(wins) => write!(f, "Win {} rounds", wins),
            MissionCriteria::DailyStreak(days) => write!(f, "Play {} consecutive days", days),
            MissionCriteria::PerfectScore => f.write_str("Score a perfect 100"),
            MissionCriteria::NearPerfectScore => f.write_str("Score in the 90s"),
            MissionCriteria::ZeroScore => f.write_str("Score zero"),
        }
    }
}

/// One milestone slot. Once `date_achieved` is set the record never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StoryMission {
    pub criteria: MissionCriteria,
    pub date_achieved: String,
    pub player_name: String,
}

impl StoryMission {
    pub fn locked(criteria: MissionCriteria) -> Self {
        Self {
            criteria,
            date_achieved: String::new(),
            player_name: String::new(),
        }
    }

    pub fn is_achieved(&self) -> bool {
        !self.date_achieved.is_empty()
    }
}
