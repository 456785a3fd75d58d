mod common;

use common::*;
use trivia_core::{apply_to_round, apply_to_user};
use trivia_types::{MissionCriteria, Sport, Tile};

#[test]
fn test_round_built_from_scraped_player() {
    let config = create_test_config();
    let round = create_test_round(&config, "2024-06-01");

    assert_eq!(round.round_id(), "baseball#2024-06-01");
    assert_eq!(round.player.initials, "KGJ");
    assert_eq!(round.player.years_active, "1989-1991, 2000-2001");
    assert_eq!(
        round.player.personal_achievements,
        "HOF, 1x AL MVP, 13x All-Star, 10x Gold Glove"
    );
    assert_eq!(round.stats.total_plays, 0);
}

#[test]
fn test_round_and_user_stats_track_separately() {
    let config = create_test_config();
    let mut round = create_test_round(&config, "2024-06-01");
    let mut first = create_test_user(&config, "first");
    let mut second = create_test_user(&config, "second");

    let winning = create_result(90, true, &["bio", "careerStats"]);
    let losing = create_result(0, false, &["photo", "bio", "yearsActive"]);

    apply_to_round(&mut round, &winning);
    apply_to_user(&mut first, Sport::Baseball, "2024-06-01", &winning, "2024-06-01", &config);
    apply_to_round(&mut round, &losing);
    apply_to_user(&mut second, Sport::Baseball, "2024-06-01", &losing, "2024-06-01", &config);

    assert_eq!(round.stats.total_plays, 2);
    assert_eq!(round.stats.percentage_correct, 50.0);
    assert_eq!(round.stats.highest_score, 90);
    assert_eq!(round.stats.most_common_tile, Some(Tile::Bio));
    assert_eq!(round.stats.average_number_of_tile_flips, 2.5);

    let first_stats = &first.sport_stats(Sport::Baseball).unwrap().stats;
    assert_eq!(first_stats.total_plays, 1);
    assert_eq!(first_stats.percentage_correct, 100.0);

    let second_stats = &second.sport_stats(Sport::Baseball).unwrap().stats;
    assert_eq!(second_stats.percentage_correct, 0.0);
    assert_eq!(second_stats.average_correct_score, 0.0);
}

#[test]
fn test_first_play_unlocks_missions() {
    let config = create_test_config();
    let mut user = create_test_user(&config, "rookie");

    let outcome = apply_to_user(
        &mut user,
        Sport::Baseball,
        "2024-06-01",
        &create_result(100, true, &["bio"]),
        "2024-06-01",
        &config,
    );

    assert_eq!(outcome.current_daily_streak, 1);
    // First day played unlocks silently
    assert_eq!(
        outcome.unlocked_missions,
        vec![MissionCriteria::Wins(1), MissionCriteria::PerfectScore]
    );
    let days_mission = user
        .story_missions
        .iter()
        .find(|m| m.criteria == MissionCriteria::DaysPlayed(1))
        .unwrap();
    assert_eq!(days_mission.date_achieved, "2024-06-01");
    assert_eq!(days_mission.player_name, "Ken Griffey Jr.");
}

#[test]
fn test_daily_streak_missions_over_a_week() {
    let config = create_test_config();
    let mut user = create_test_user(&config, "regular");

    let mut streak_unlocks = Vec::new();
    for day in consecutive_days("2024-06-01", 7) {
        let outcome = apply_to_user(
            &mut user,
            Sport::Football,
            &day,
            &create_result(50, false, &["photo"]),
            &day,
            &config,
        );
        streak_unlocks.extend(
            outcome
                .unlocked_missions
                .into_iter()
                .filter(|c| matches!(c, MissionCriteria::DailyStreak(_))),
        );
    }

    assert_eq!(user.current_daily_streak, 7);
    assert_eq!(user.total_days_played, 7);
    assert_eq!(
        streak_unlocks,
        vec![MissionCriteria::DailyStreak(3), MissionCriteria::DailyStreak(7)]
    );
}

#[test]
fn test_repeated_submission_does_not_unlock_twice() {
    let config = create_test_config();
    let mut user = create_test_user(&config, "repeat");
    let result = create_result(0, false, &[]);

    let day = "2024-06-01";
    let first = apply_to_user(&mut user, Sport::Basketball, day, &result, day, &config);
    let second = apply_to_user(&mut user, Sport::Basketball, day, &result, day, &config);

    assert_eq!(first.unlocked_missions, vec![MissionCriteria::ZeroScore]);
    assert!(second.unlocked_missions.is_empty());
    assert_eq!(user.total_days_played, 1);
    assert_eq!(user.total_plays, 2);
}

#[test]
fn test_streak_resets_after_gap() {
    let config = create_test_config();
    let mut user = create_test_user(&config, "gappy");
    let result = create_result(70, true, &["bio"]);

    for day in ["2024-01-14", "2024-01-15"] {
        apply_to_user(&mut user, Sport::Baseball, day, &result, day, &config);
    }
    assert_eq!(user.current_daily_streak, 2);

    // Playing an older round does not affect the streak; the local day does
    let (play_date, today) = ("2023-11-02", "2024-01-20");
    let outcome = apply_to_user(&mut user, Sport::Baseball, play_date, &result, today, &config);
    assert_eq!(outcome.current_daily_streak, 1);
    assert_eq!(user.last_day_played, "2024-01-20");
}
