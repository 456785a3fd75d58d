use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// A clue category a player can reveal during a round.
///
/// Declaration order is significant: it is the tie-break order used when
/// picking the most and least common tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Tile {
    Bio,
    PlayerInformation,
    DraftInformation,
    TeamsPlayedOn,
    JerseyNumbers,
    CareerStats,
    PersonalAchievements,
    Photo,
    YearsActive,
    Initials,
    Nicknames,
}

impl Tile {
    pub const ALL: [Tile; 11] = [
        Tile::Bio,
        Tile::PlayerInformation,
        Tile::DraftInformation,
        Tile::TeamsPlayedOn,
        Tile::JerseyNumbers,
        Tile::CareerStats,
        Tile::PersonalAchievements,
        Tile::Photo,
        Tile::YearsActive,
        Tile::Initials,
        Tile::Nicknames,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tile::Bio => "bio",
            Tile::PlayerInformation => "playerInformation",
            Tile::DraftInformation => "draftInformation",
            Tile::TeamsPlayedOn => "teamsPlayedOn",
            Tile::JerseyNumbers => "jerseyNumbers",
            Tile::CareerStats => "careerStats",
            Tile::PersonalAchievements => "personalAchievements",
            Tile::Photo => "photo",
            Tile::YearsActive => "yearsActive",
            Tile::Initials => "initials",
            Tile::Nicknames => "nicknames",
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tile::ALL
            .iter()
            .copied()
            .find(|tile| tile.as_str() == s)
            .ok_or_else(|| format!("Unknown tile: {}", s))
    }
}

/// Per-tile flip counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct TileFlipTracker {
    pub bio: u32,
    pub player_information: u32,
    pub draft_information: u32,
    pub teams_played_on: u32,
    pub jersey_numbers: u32,
    pub career_stats: u32,
    pub personal_achievements: u32,
    pub photo: u32,
    pub years_active: u32,
    pub initials: u32,
    pub nicknames: u32,
}

impl TileFlipTracker {
    pub fn count(&self, tile: Tile) -> u32 {
        match tile {
            Tile::Bio => self.bio,
            Tile::PlayerInformation => self.player_information,
            Tile::DraftInformation => self.draft_information,
            Tile::TeamsPlayedOn => self.teams_played_on,
            Tile::JerseyNumbers => self.jersey_numbers,
            Tile::CareerStats => self.career_stats,
            Tile::PersonalAchievements => self.personal_achievements,
            Tile::Photo => self.photo,
            Tile::YearsActive => self.years_active,
            Tile::Initials => self.initials,
            Tile::Nicknames => self.nicknames,
        }
    }

    pub fn count_mut(&mut self, tile: Tile) -> &mut u32 {
        match tile {
            Tile::Bio => &mut self.bio,
            Tile::PlayerInformation => &mut self.player_information,
            Tile::DraftInformation => &mut self.draft_information,
            Tile::TeamsPlayedOn => &mut self.teams_played_on,
            Tile::JerseyNumbers => &mut self.jersey_numbers,
            Tile::CareerStats => &mut self.career_stats,
            Tile::PersonalAchievements => &mut self.personal_achievements,
            Tile::Photo => &mut self.photo,
            Tile::YearsActive => &mut self.years_active,
            Tile::Initials => &mut self.initials,
            Tile::Nicknames => &mut self.nicknames,
        }
    }

    /// Counts in enumeration order.
    pub fn counts(&self) -> impl Iterator<Item = (Tile, u32)> + '_ {
        Tile::ALL.into_iter().map(move |tile| (tile, self.count(tile)))
    }
}

/// Running aggregate over every result submitted for one scope
/// (a round, or a user's plays within one sport).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Stats {
    pub total_plays: u32,
    pub percentage_correct: f64,
    pub highest_score: u32,
    pub average_correct_score: f64,
    pub average_incorrect_guesses: f64,
    pub average_number_of_tile_flips: f64,
    pub first_tile_flipped: TileFlipTracker,
    pub last_tile_flipped: TileFlipTracker,
    pub all_tiles_flipped: TileFlipTracker,
    pub most_common_first_tile: Option<Tile>,
    pub most_common_last_tile: Option<Tile>,
    pub most_common_tile: Option<Tile>,
    pub least_common_tile: Option<Tile>,
}

/// One play submission, validated upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PlayResult {
    pub score: u32,
    pub is_correct: bool,
    /// Raw tile identifiers in the order they were flipped.
    pub flipped_tiles: Vec<String>,
    pub incorrect_guesses: u32,
    pub player_name: String,
}
