use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, RwLock};

use crate::repositories::{RoundRepository, UserRepository};
use trivia_core::{
    GameConfig, PlayerRecordBuilder, ScrapedPlayer, SubmissionOutcome, apply_to_round,
    apply_to_user, streaks, validate_result,
};
use trivia_types::{PlayResult, Round, Sport, Stats, User};

/// What a submission changed: the round's new aggregate, and the user's
/// progress when the play was made by a signed-in user.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub round_stats: Stats,
    pub outcome: Option<SubmissionOutcome>,
}

/// Loads the records a play touches, runs the engine over them and writes
/// them back.
pub struct SubmissionService {
    db: DatabaseConnection,
    rounds: RoundRepository,
    users: UserRepository,
    config: GameConfig,
    record_locks: RwLock<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl SubmissionService {
    pub fn new(db: DatabaseConnection, config: GameConfig) -> Self {
        Self {
            rounds: RoundRepository::new(db.clone()),
            users: UserRepository::new(db.clone()),
            db,
            config,
            record_locks: RwLock::new(HashMap::new()),
        }
    }

    pub fn rounds(&self) -> &RoundRepository {
        &self.rounds
    }

    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    /// Normalize a scraped player and store a fresh round with zeroed stats.
    /// Seasons still running at `now` are shown as "Present".
    pub async fn create_round(
        &self,
        sport: Sport,
        play_date: &str,
        scraped: ScrapedPlayer,
        now: DateTime<Utc>,
    ) -> Result<Round> {
        let player = PlayerRecordBuilder::new(&self.config)
            .as_of(now.date_naive())
            .build(sport, scraped);
        let round = self
            .rounds
            .create_round(Round::new(sport, play_date, player))
            .await?;
        tracing::info!("Created round {}", round.round_id());
        Ok(round)
    }

    pub async fn register_user(
        &self,
        id: &str,
        username: &str,
        utc_offset_minutes: i32,
        now: DateTime<Utc>,
    ) -> Result<User> {
        let missions = self.config.story_missions.tables().default_missions();
        let mut user = User::new(id, username, missions, now.to_rfc3339());
        user.utc_offset_minutes = utc_offset_minutes;
        self.users.create_user(user).await
    }

    /// Record one play of the `(sport, play_date)` round. Anonymous plays
    /// (`user_id` of `None`) only update the round. The round and the user
    /// are written in one transaction.
    pub async fn submit_result(
        &self,
        sport: Sport,
        play_date: &str,
        user_id: Option<&str>,
        result: PlayResult,
        now: DateTime<Utc>,
    ) -> Result<SubmissionReceipt> {
        validate_result(&result)?;

        // Lock order is always round, then user
        let round_key = format!("{}#{}", sport, play_date);
        let user_key = user_id.map(|id| format!("user#{}", id));
        let round_lock = self.record_lock(&round_key).await;
        let user_lock = match &user_key {
            Some(key) => Some(self.record_lock(key).await),
            None => None,
        };

        let receipt = {
            let _round_guard = round_lock.lock().await;
            let _user_guard = match &user_lock {
                Some(lock) => Some(lock.lock().await),
                None => None,
            };
            self.apply_submission(sport, play_date, user_id, &result, now)
                .await
        };

        if let (Some(key), Some(lock)) = (&user_key, user_lock) {
            self.release_lock(key, lock).await;
        }
        self.release_lock(&round_key, round_lock).await;

        receipt
    }

    async fn apply_submission(
        &self,
        sport: Sport,
        play_date: &str,
        user_id: Option<&str>,
        result: &PlayResult,
        now: DateTime<Utc>,
    ) -> Result<SubmissionReceipt> {
        let mut round = self
            .rounds
            .find(sport, play_date)
            .await?
            .ok_or_else(|| anyhow!("Round not found: {}#{}", sport, play_date))?;

        let mut user = match user_id {
            Some(user_id) => Some(
                self.users
                    .find_by_id(user_id)
                    .await?
                    .ok_or_else(|| anyhow!("User not found: {}", user_id))?,
            ),
            None => None,
        };

        let outcome = user.as_mut().map(|user| {
            let today = streaks::local_day(now, user.utc_offset_minutes);
            apply_to_user(user, sport, play_date, result, &today, &self.config)
        });
        apply_to_round(&mut round, result);

        let txn = self.db.begin().await?;
        let written = Self::write_records(&txn, &round, user.as_ref()).await;
        match written {
            Ok(()) => txn.commit().await?,
            Err(e) => {
                txn.rollback().await?;
                return Err(e);
            }
        }

        if let (Some(user), Some(outcome)) = (&user, &outcome) {
            if !outcome.unlocked_missions.is_empty() {
                tracing::info!(
                    "User {} unlocked {} story mission(s)",
                    user.id,
                    outcome.unlocked_missions.len()
                );
            }
        }
        tracing::info!(
            "Recorded result for round {} (score {}, correct {}, user {})",
            round.round_id(),
            result.score,
            result.is_correct,
            user_id.unwrap_or("anonymous")
        );

        Ok(SubmissionReceipt {
            round_stats: round.stats,
            outcome,
        })
    }

    async fn write_records(
        txn: &DatabaseTransaction,
        round: &Round,
        user: Option<&User>,
    ) -> Result<()> {
        if let Some(user) = user {
            UserRepository::save_user_in(txn, user).await?;
        }
        RoundRepository::save_round_in(txn, round).await
    }

    async fn record_lock(&self, key: &str) -> Arc<AsyncMutex<()>> {
        {
            let guard = self.record_locks.read().await;
            if let Some(lock) = guard.get(key) {
                return lock.clone();
            }
        }

        let mut guard = self.record_locks.write().await;
        guard
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }

    /// Drop the map's entry once no other submission holds or waits on it.
    async fn release_lock(&self, key: &str, lock: Arc<AsyncMutex<()>>) {
        let mut guard = self.record_locks.write().await;
        // One reference in the map, one here
        if Arc::strong_count(&lock) == 2 {
            guard.remove(key);
        }
    }
}
