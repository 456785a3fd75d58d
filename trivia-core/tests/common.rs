#![allow(dead_code)]

use chrono::NaiveDate;
use trivia_core::{GameConfig, PlayerRecordBuilder, ScrapedPlayer};
use trivia_types::{PlayResult, Round, Sport, User};

/// Config with seasons fixed at mid-2024 so "Present" is predictable
pub fn create_test_config() -> GameConfig {
    GameConfig::for_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

/// Creates a user with every story mission still locked
pub fn create_test_user(config: &GameConfig, id: &str) -> User {
    let missions = config.story_missions.tables().default_missions();
    User::new(id, format!("{}-name", id), missions, "2024-01-01T00:00:00Z")
}

/// Creates a result with the given flips
pub fn create_result(score: u32, is_correct: bool, tiles: &[&str]) -> PlayResult {
    PlayResult {
        score,
        is_correct,
        flipped_tiles: tiles.iter().map(|t| t.to_string()).collect(),
        incorrect_guesses: if is_correct { 1 } else { 3 },
        player_name: "Ken Griffey Jr.".to_string(),
    }
}

/// Creates a baseball round built through the player pipeline
pub fn create_test_round(config: &GameConfig, play_date: &str) -> Round {
    let scraped = ScrapedPlayer {
        name: "Ken Griffey Jr.".to_string(),
        bio: "Born in Donora, Pennsylvania".to_string(),
        year_labels: ["1989", "1990", "1991", "2000", "2001", "Career"]
            .iter()
            .map(|y| y.to_string())
            .collect(),
        achievements: vec![
            "Hall of Fame".to_string(),
            "13x All-Star".to_string(),
            "1x AL MVP".to_string(),
            "10x Gold Glove".to_string(),
        ],
        ..ScrapedPlayer::default()
    };
    let player = PlayerRecordBuilder::new(config).build(Sport::Baseball, scraped);
    Round::new(Sport::Baseball, play_date, player)
}

/// Days in order starting from `start`, formatted YYYY-MM-DD
pub fn consecutive_days(start: &str, count: usize) -> Vec<String> {
    let first = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
    first
        .iter_days()
        .take(count)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect()
}
