use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use trivia_types::User;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Update the daily streak for a play on `today`, the user's local calendar
/// day as `YYYY-MM-DD`. Returns the resulting streak.
pub fn record_play(user: &mut User, today: &str) -> u32 {
    if user.last_day_played.is_empty() {
        user.current_daily_streak = 1;
    } else if user.last_day_played != today {
        user.current_daily_streak = if is_next_day(&user.last_day_played, today) {
            user.current_daily_streak + 1
        } else {
            1
        };
    }

    user.last_day_played = today.to_string();
    user.current_daily_streak
}

fn is_next_day(previous: &str, today: &str) -> bool {
    match (parse_day(previous), parse_day(today)) {
        (Some(previous), Some(today)) => previous.succ_opt() == Some(today),
        _ => {
            tracing::warn!(
                "Could not compare play days '{}' and '{}', resetting streak",
                previous,
                today
            );
            false
        }
    }
}

fn parse_day(day: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(day.trim(), DAY_FORMAT).ok()
}

/// The calendar day at `now` for someone `utc_offset_minutes` away from UTC.
pub fn local_day(now: DateTime<Utc>, utc_offset_minutes: i32) -> String {
    let local = match FixedOffset::east_opt(utc_offset_minutes * 60) {
        Some(offset) => now.with_timezone(&offset).date_naive(),
        None => {
            tracing::warn!(
                "UTC offset of {} minutes is out of range, using UTC",
                utc_offset_minutes
            );
            now.date_naive()
        }
    };
    local.format(DAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user_last_played(day: &str, streak: u32) -> User {
        let mut user = User::new("user-1", "Tester", Vec::new(), "2024-01-01T00:00:00Z");
        user.last_day_played = day.to_string();
        user.current_daily_streak = streak;
        user
    }

    #[test]
    fn test_first_play_starts_streak() {
        let mut user = user_last_played("", 0);
        assert_eq!(record_play(&mut user, "2024-01-15"), 1);
        assert_eq!(user.last_day_played, "2024-01-15");
    }

    #[test]
    fn test_same_day_replay_is_noop() {
        let mut user = user_last_played("2024-01-15", 4);
        assert_eq!(record_play(&mut user, "2024-01-15"), 4);
        assert_eq!(user.last_day_played, "2024-01-15");
    }

    #[test]
    fn test_next_day_increments_then_gap_resets() {
        let mut user = user_last_played("2024-01-14", 1);
        assert_eq!(record_play(&mut user, "2024-01-15"), 2);
        assert_eq!(record_play(&mut user, "2024-01-20"), 1);
        assert_eq!(user.last_day_played, "2024-01-20");
    }

    #[test]
    fn test_next_day_across_month_and_year() {
        let mut user = user_last_played("2023-12-31", 9);
        assert_eq!(record_play(&mut user, "2024-01-01"), 10);

        let mut user = user_last_played("2024-02-28", 2);
        assert_eq!(record_play(&mut user, "2024-02-29"), 3);
    }

    #[test]
    fn test_two_day_gap_and_backwards_reset() {
        let mut user = user_last_played("2024-01-10", 6);
        assert_eq!(record_play(&mut user, "2024-01-12"), 1);

        let mut user = user_last_played("2024-01-10", 6);
        assert_eq!(record_play(&mut user, "2024-01-09"), 1);
    }

    #[test]
    fn test_malformed_stored_day_resets() {
        let mut user = user_last_played("yesterday", 3);
        assert_eq!(record_play(&mut user, "2024-01-12"), 1);
    }

    #[test]
    fn test_local_day_uses_offset() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 3, 30, 0).unwrap();
        assert_eq!(local_day(now, 0), "2024-01-15");
        // UTC-5 is still the previous evening
        assert_eq!(local_day(now, -300), "2024-01-14");
        assert_eq!(local_day(now, 540), "2024-01-15");
    }
}
