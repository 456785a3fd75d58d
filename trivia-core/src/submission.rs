use thiserror::Error;
use trivia_types::{MissionCriteria, PlayResult, Round, RoundHistory, Sport, User};

use crate::{GameConfig, StatsAggregator, streaks};

pub const MAX_SCORE: u32 = 100;
pub const MAX_INCORRECT_GUESSES: u32 = 100;

#[derive(Debug, Error, PartialEq)]
pub enum SubmissionError {
    #[error("Score {0} is outside 0-{}", MAX_SCORE)]
    ScoreOutOfRange(u32),
    #[error("Incorrect guess count {0} is outside 0-{}", MAX_INCORRECT_GUESSES)]
    IncorrectGuessesOutOfRange(u32),
}

/// What the client is told after a play.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub current_daily_streak: u32,
    pub unlocked_missions: Vec<MissionCriteria>,
}

pub fn validate_result(result: &PlayResult) -> Result<(), SubmissionError> {
    if result.score > MAX_SCORE {
        return Err(SubmissionError::ScoreOutOfRange(result.score));
    }
    if result.incorrect_guesses > MAX_INCORRECT_GUESSES {
        return Err(SubmissionError::IncorrectGuessesOutOfRange(
            result.incorrect_guesses,
        ));
    }
    Ok(())
}

pub fn apply_to_round(round: &mut Round, result: &PlayResult) {
    StatsAggregator::apply_result(&mut round.stats, result);
}

/// Fold a play into the user's totals, per-sport stats, streak and missions.
/// `today` is the user's local calendar day, not the round's play date.
pub fn apply_to_user(
    user: &mut User,
    sport: Sport,
    play_date: &str,
    result: &PlayResult,
    today: &str,
    config: &GameConfig,
) -> SubmissionOutcome {
    if user.last_day_played != today {
        user.total_days_played += 1;
    }
    user.total_plays += 1;
    if result.is_correct {
        user.total_wins += 1;
    }

    let entry = user.sport_stats_mut(sport);
    StatsAggregator::apply_result(&mut entry.stats, result);
    entry.history.insert(
        0,
        RoundHistory {
            play_date: play_date.to_string(),
            player_name: result.player_name.clone(),
            score: result.score,
            is_correct: result.is_correct,
            incorrect_guesses: result.incorrect_guesses,
            flipped_tiles: result.flipped_tiles.clone(),
        },
    );
    entry.history.truncate(config.round_history_limit);

    let current_daily_streak = streaks::record_play(user, today);

    let missions = &config.story_missions;
    let earned = missions.evaluate_milestones(user, result.score);
    let unlocked_missions = missions.apply_milestones(user, today, &result.player_name, &earned);

    SubmissionOutcome {
        current_daily_streak,
        unlocked_missions,
    }
}
