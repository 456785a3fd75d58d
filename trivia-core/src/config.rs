use chrono::NaiveDate;

use crate::{
    AchievementProcessor, AchievementTables, MilestoneTables, SeasonCalendar, StoryMissionEngine,
    YearRangeFormatter,
};

pub const DEFAULT_MAX_ACHIEVEMENTS_LENGTH: usize = 100;
pub const DEFAULT_ROUND_HISTORY_LIMIT: usize = 30;

/// Everything the engine needs that is data rather than code. Built once
/// and passed in; nothing here changes after construction.
pub struct GameConfig {
    pub achievements: AchievementProcessor,
    pub year_ranges: YearRangeFormatter,
    pub story_missions: StoryMissionEngine,
    pub max_achievements_length: usize,
    pub round_history_limit: usize,
}

impl GameConfig {
    pub fn new(
        achievement_tables: AchievementTables,
        calendar: SeasonCalendar,
        milestones: MilestoneTables,
    ) -> Self {
        Self {
            achievements: AchievementProcessor::new(achievement_tables),
            year_ranges: YearRangeFormatter::new(calendar),
            story_missions: StoryMissionEngine::new(milestones),
            max_achievements_length: DEFAULT_MAX_ACHIEVEMENTS_LENGTH,
            round_history_limit: DEFAULT_ROUND_HISTORY_LIMIT,
        }
    }

    /// Built-in tables with seasons as of `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::new(
            AchievementTables::standard(),
            SeasonCalendar::for_date(date),
            MilestoneTables::default(),
        )
    }

    pub fn with_max_achievements_length(mut self, max_length: usize) -> Self {
        self.max_achievements_length = max_length;
        self
    }

    pub fn with_round_history_limit(mut self, limit: usize) -> Self {
        self.round_history_limit = limit;
        self
    }
}
