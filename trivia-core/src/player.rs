use chrono::NaiveDate;
use trivia_types::{Player, Sport};

use crate::{GameConfig, SeasonCalendar, YearRangeFormatter, collect_year_labels};

/// Raw player fields as produced by the scraping pipeline.
#[derive(Debug, Clone, Default)]
pub struct ScrapedPlayer {
    pub name: String,
    pub bio: String,
    pub player_information: String,
    pub draft_information: String,
    pub teams_played_on: String,
    pub jersey_numbers: String,
    pub career_stats: String,
    pub photo: String,
    pub nicknames: String,
    pub year_labels: Vec<String>,
    pub achievements: Vec<String>,
}

pub struct PlayerRecordBuilder<'a> {
    config: &'a GameConfig,
    year_ranges: Option<YearRangeFormatter>,
}

impl<'a> PlayerRecordBuilder<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self {
            config,
            year_ranges: None,
        }
    }

    /// Decide which seasons are "Present" as of `date` instead of the date
    /// the config was built for.
    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.year_ranges = Some(YearRangeFormatter::new(SeasonCalendar::for_date(date)));
        self
    }

    pub fn build(&self, sport: Sport, scraped: ScrapedPlayer) -> Player {
        let years = collect_year_labels(&scraped.year_labels);
        let year_ranges = self.year_ranges.as_ref().unwrap_or(&self.config.year_ranges);
        let years_active = year_ranges.format(&years, sport);
        let personal_achievements = self.config.achievements.select_within_budget(
            sport,
            &scraped.achievements,
            self.config.max_achievements_length,
        );

        tracing::debug!(
            "Built {} player record for {}: years '{}', achievements '{}'",
            sport,
            scraped.name,
            years_active,
            personal_achievements
        );

        Player {
            initials: initials(&scraped.name),
            name: scraped.name,
            bio: scraped.bio,
            player_information: scraped.player_information,
            draft_information: scraped.draft_information,
            teams_played_on: scraped.teams_played_on,
            jersey_numbers: scraped.jersey_numbers,
            career_stats: scraped.career_stats,
            personal_achievements,
            photo: scraped.photo,
            years_active,
            nicknames: scraped.nicknames,
        }
    }
}

/// "Ken Griffey Jr." -> "KGJ"
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphabetic()))
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::for_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ken Griffey Jr."), "KGJ");
        assert_eq!(initials("  shaquille   o'neal "), "SO");
        assert_eq!(initials("C.J. Stroud"), "CS");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_build_normalizes_years_and_achievements() {
        let config = config();
        let scraped = ScrapedPlayer {
            name: "Derek Jeter".to_string(),
            bio: "Shortstop from Kalamazoo".to_string(),
            year_labels: vec![
                "1995", "1996", "1997", "1997", "Career", "20 Seasons", "",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            achievements: vec![
                "14x All-Star".to_string(),
                "Hall of Fame".to_string(),
                "AL Rookie of the Year".to_string(),
                "Player of the Week".to_string(),
            ],
            ..ScrapedPlayer::default()
        };

        let player = PlayerRecordBuilder::new(&config).build(Sport::Baseball, scraped);

        assert_eq!(player.name, "Derek Jeter");
        assert_eq!(player.initials, "DJ");
        assert_eq!(player.bio, "Shortstop from Kalamazoo");
        assert_eq!(player.years_active, "1995-1997");
        assert_eq!(player.personal_achievements, "HOF, AL ROY, 14x All-Star");
    }

    #[test]
    fn test_as_of_moves_the_current_season() {
        // Config built before the 2025-26 basketball season started
        let config = config();
        let scraped = || ScrapedPlayer {
            name: "Stephen Curry".to_string(),
            year_labels: vec!["2023-24".to_string(), "2024-25".to_string(), "2025-26".to_string()],
            ..ScrapedPlayer::default()
        };

        let stale = PlayerRecordBuilder::new(&config).build(Sport::Basketball, scraped());
        assert_eq!(stale.years_active, "2024-2026");

        let current = PlayerRecordBuilder::new(&config)
            .as_of(NaiveDate::from_ymd_opt(2025, 11, 1).unwrap())
            .build(Sport::Basketball, scraped());
        assert_eq!(current.years_active, "2024-Present");
    }

    #[test]
    fn test_build_uses_configured_budget() {
        let config = config().with_max_achievements_length(10);
        let scraped = ScrapedPlayer {
            name: "Tim Duncan".to_string(),
            achievements: vec!["5x NBA Champ".to_string(), "15x All Star".to_string()],
            ..ScrapedPlayer::default()
        };

        let player = PlayerRecordBuilder::new(&config).build(Sport::Basketball, scraped);
        assert_eq!(player.personal_achievements, "5x NBA Champ");
    }
}
