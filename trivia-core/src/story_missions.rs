use std::ops::RangeInclusive;
use trivia_types::{MissionCategory, MissionCriteria, StoryMission, User};

/// Milestone values checked after every play. Each table matches exactly,
/// never as a threshold.
#[derive(Debug, Clone)]
pub struct MilestoneTables {
    pub days_played: Vec<u32>,
    pub wins: Vec<u32>,
    pub daily_streaks: Vec<u32>,
    pub perfect_score: u32,
    pub near_perfect_scores: RangeInclusive<u32>,
    pub zero_score: u32,
}

impl Default for MilestoneTables {
    fn default() -> Self {
        Self {
            days_played: vec![1, 3, 7, 30, 100, 365],
            wins: vec![1, 10, 25, 50, 100],
            daily_streaks: vec![3, 7, 14, 30, 100],
            perfect_score: 100,
            near_perfect_scores: 90..=99,
            zero_score: 0,
        }
    }
}

impl MilestoneTables {
    /// Locked mission slots for a brand new user, one per milestone.
    pub fn default_missions(&self) -> Vec<StoryMission> {
        self.days_played
            .iter()
            .map(|&days| MissionCriteria::DaysPlayed(days))
            .chain(self.wins.iter().map(|&wins| MissionCriteria::Wins(wins)))
            .chain(
                self.daily_streaks
                    .iter()
                    .map(|&days| MissionCriteria::DailyStreak(days)),
            )
            .chain([
                MissionCriteria::PerfectScore,
                MissionCriteria::NearPerfectScore,
                MissionCriteria::ZeroScore,
            ])
            .map(StoryMission::locked)
            .collect()
    }

    fn score_milestone(&self, score: u32) -> Option<MissionCriteria> {
        if score == self.perfect_score {
            Some(MissionCriteria::PerfectScore)
        } else if self.near_perfect_scores.contains(&score) {
            Some(MissionCriteria::NearPerfectScore)
        } else if score == self.zero_score {
            Some(MissionCriteria::ZeroScore)
        } else {
            None
        }
    }
}

pub struct StoryMissionEngine {
    tables: MilestoneTables,
}

impl StoryMissionEngine {
    pub fn new(tables: MilestoneTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &MilestoneTables {
        &self.tables
    }

    /// Criteria reached by the user's current totals and the score just
    /// submitted, at most one per table.
    pub fn evaluate_milestones(&self, user: &User, submitted_score: u32) -> Vec<MissionCriteria> {
        let tables = &self.tables;
        [
            exact_match(&tables.days_played, user.total_days_played)
                .map(MissionCriteria::DaysPlayed),
            exact_match(&tables.wins, user.total_wins).map(MissionCriteria::Wins),
            exact_match(&tables.daily_streaks, user.current_daily_streak)
                .map(MissionCriteria::DailyStreak),
            tables.score_milestone(submitted_score),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Unlock every still-locked mission whose criteria was earned, and return
    /// the ones the client should announce. Missions already achieved are
    /// never modified. Days-played missions unlock without being announced.
    pub fn apply_milestones(
        &self,
        user: &mut User,
        today: &str,
        player_name: &str,
        earned: &[MissionCriteria],
    ) -> Vec<MissionCriteria> {
        let mut surfaced = Vec::new();

        for mission in user
            .story_missions
            .iter_mut()
            .filter(|mission| earned.contains(&mission.criteria))
        {
            if mission.is_achieved() {
                continue;
            }

            mission.date_achieved = today.to_string();
            mission.player_name = player_name.to_string();
            tracing::info!(
                "User {} unlocked story mission '{}' on {}",
                user.id,
                mission.criteria,
                today
            );

            if mission.criteria.category() != MissionCategory::DaysPlayed {
                surfaced.push(mission.criteria);
            }
        }

        surfaced
    }
}

fn exact_match(milestones: &[u32], value: u32) -> Option<u32> {
    milestones.iter().copied().find(|&milestone| milestone == value)
}
