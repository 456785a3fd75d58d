use anyhow::{Context, Result};
use sea_orm::{ActiveValue, ConnectionTrait, DatabaseConnection, EntityTrait};

use crate::entities::{prelude::*, users};
use trivia_types::User;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_user(model: users::Model) -> Result<User> {
        Ok(User {
            sports: serde_json::from_str(&model.sports)
                .with_context(|| format!("Corrupt sport stats for user {}", model.id))?,
            story_missions: serde_json::from_str(&model.story_missions)
                .with_context(|| format!("Corrupt story missions for user {}", model.id))?,
            id: model.id,
            username: model.username,
            current_daily_streak: model.current_daily_streak as u32,
            last_day_played: model.last_day_played,
            total_plays: model.total_plays as u32,
            total_wins: model.total_wins as u32,
            total_days_played: model.total_days_played as u32,
            utc_offset_minutes: model.utc_offset_minutes,
            created_at: model.created_at.to_rfc3339(),
        })
    }

    fn user_to_active_model(user: &User) -> Result<users::ActiveModel> {
        Ok(users::ActiveModel {
            id: ActiveValue::Unchanged(user.id.clone()),
            username: ActiveValue::Set(user.username.clone()),
            current_daily_streak: ActiveValue::Set(user.current_daily_streak as i32),
            last_day_played: ActiveValue::Set(user.last_day_played.clone()),
            total_plays: ActiveValue::Set(user.total_plays as i32),
            total_wins: ActiveValue::Set(user.total_wins as i32),
            total_days_played: ActiveValue::Set(user.total_days_played as i32),
            utc_offset_minutes: ActiveValue::Set(user.utc_offset_minutes),
            sports: ActiveValue::Set(serde_json::to_string(&user.sports)?),
            story_missions: ActiveValue::Set(serde_json::to_string(&user.story_missions)?),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(chrono::Utc::now().into()),
        })
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let user_model = Users::find_by_id(id.to_string()).one(&self.db).await?;
        user_model.map(Self::model_to_user).transpose()
    }

    pub async fn create_user(&self, user: User) -> Result<User> {
        let created_at = chrono::DateTime::parse_from_rfc3339(&user.created_at)
            .unwrap_or_else(|_| chrono::Utc::now().into());

        let mut user_model = Self::user_to_active_model(&user)?;
        user_model.id = ActiveValue::Set(user.id.clone());
        user_model.created_at = ActiveValue::Set(created_at);

        Users::insert(user_model)
            .exec_without_returning(&self.db)
            .await?;

        // Fetch the created user
        self.find_by_id(&user.id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Failed to retrieve created user"))
    }

    /// Persist the whole user record after the engine has mutated it.
    pub async fn save_user(&self, user: &User) -> Result<()> {
        Self::save_user_in(&self.db, user).await
    }

    /// Same as `save_user`, on a caller-supplied connection or transaction.
    pub async fn save_user_in<C: ConnectionTrait>(conn: &C, user: &User) -> Result<()> {
        Users::update(Self::user_to_active_model(user)?)
            .exec(conn)
            .await
            .with_context(|| format!("Failed to save user {}", user.id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_to_memory_database;
    use migration::{Migrator, MigratorTrait};
    use trivia_core::MilestoneTables;
    use trivia_types::{MissionCriteria, Sport};

    async fn setup_test_db() -> UserRepository {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        UserRepository::new(db)
    }

    fn test_user(id: &str) -> User {
        User::new(
            id,
            "Test User",
            MilestoneTables::default().default_missions(),
            chrono::Utc::now().to_rfc3339(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let repo = setup_test_db().await;

        let created_user = repo.create_user(test_user("auth0|abc")).await.unwrap();
        assert_eq!(created_user.username, "Test User");
        assert_eq!(created_user.current_daily_streak, 0);
        assert!(created_user.sports.is_empty());

        let found_user = repo.find_by_id("auth0|abc").await.unwrap().unwrap();
        assert_eq!(found_user.story_missions, created_user.story_missions);

        assert!(repo.find_by_id("auth0|missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_user_round_trips_progress() {
        let repo = setup_test_db().await;
        let mut user = repo.create_user(test_user("auth0|xyz")).await.unwrap();

        user.current_daily_streak = 3;
        user.last_day_played = "2024-05-03".to_string();
        user.total_plays = 5;
        user.total_wins = 4;
        user.total_days_played = 3;
        user.utc_offset_minutes = -420;
        user.sport_stats_mut(Sport::Football).stats.total_plays = 5;
        user.story_missions[0].date_achieved = "2024-05-01".to_string();
        user.story_missions[0].player_name = "Tom Brady".to_string();

        repo.save_user(&user).await.unwrap();

        let stored = repo.find_by_id("auth0|xyz").await.unwrap().unwrap();
        assert_eq!(stored.current_daily_streak, 3);
        assert_eq!(stored.last_day_played, "2024-05-03");
        assert_eq!(stored.total_wins, 4);
        assert_eq!(stored.utc_offset_minutes, -420);
        assert_eq!(stored.sport_stats(Sport::Football).unwrap().stats.total_plays, 5);
        assert_eq!(stored.story_missions[0].criteria, MissionCriteria::DaysPlayed(1));
        assert_eq!(stored.story_missions[0].player_name, "Tom Brady");
        assert_eq!(stored.created_at, user.created_at);
    }

    #[tokio::test]
    async fn test_save_unknown_user_fails() {
        let repo = setup_test_db().await;
        let result = repo.save_user(&test_user("auth0|ghost")).await;
        assert!(result.is_err());
    }
}
