use anyhow::{Context, Result};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::entities::{prelude::*, rounds};
use trivia_types::{Round, Sport};

pub struct RoundRepository {
    db: DatabaseConnection,
}

impl RoundRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_round(model: rounds::Model) -> Result<Round> {
        let sport: Sport = model
            .sport
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;
        let round_id = format!("{}#{}", sport, model.play_date);
        Ok(Round {
            sport,
            player: serde_json::from_str(&model.player)
                .with_context(|| format!("Corrupt player for round {}", round_id))?,
            stats: serde_json::from_str(&model.stats)
                .with_context(|| format!("Corrupt stats for round {}", round_id))?,
            play_date: model.play_date,
        })
    }

    pub async fn find(&self, sport: Sport, play_date: &str) -> Result<Option<Round>> {
        let model = Rounds::find_by_id((sport.to_string(), play_date.to_string()))
            .one(&self.db)
            .await?;
        model.map(Self::model_to_round).transpose()
    }

    pub async fn create_round(&self, round: Round) -> Result<Round> {
        if self.find(round.sport, &round.play_date).await?.is_some() {
            return Err(anyhow::anyhow!(
                "Round already exists: {}",
                round.round_id()
            ));
        }

        let now = chrono::Utc::now().into();
        let round_model = rounds::ActiveModel {
            sport: ActiveValue::Set(round.sport.to_string()),
            play_date: ActiveValue::Set(round.play_date.clone()),
            player: ActiveValue::Set(serde_json::to_string(&round.player)?),
            stats: ActiveValue::Set(serde_json::to_string(&round.stats)?),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        Rounds::insert(round_model)
            .exec_without_returning(&self.db)
            .await?;

        // Fetch the created round
        self.find(round.sport, &round.play_date)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Failed to retrieve created round"))
    }

    /// Overwrite the stored player and stats of an existing round.
    pub async fn save_round(&self, round: &Round) -> Result<()> {
        Self::save_round_in(&self.db, round).await
    }

    /// Same as `save_round`, on a caller-supplied connection or transaction.
    pub async fn save_round_in<C: ConnectionTrait>(conn: &C, round: &Round) -> Result<()> {
        let updated_round = rounds::ActiveModel {
            sport: ActiveValue::Unchanged(round.sport.to_string()),
            play_date: ActiveValue::Unchanged(round.play_date.clone()),
            player: ActiveValue::Set(serde_json::to_string(&round.player)?),
            stats: ActiveValue::Set(serde_json::to_string(&round.stats)?),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(chrono::Utc::now().into()),
        };

        Rounds::update(updated_round)
            .exec(conn)
            .await
            .with_context(|| format!("Failed to save round {}", round.round_id()))?;
        Ok(())
    }

    /// Rounds for a sport, newest play date first.
    pub async fn list_for_sport(&self, sport: Sport) -> Result<Vec<Round>> {
        Rounds::find()
            .filter(rounds::Column::Sport.eq(sport.to_string()))
            .order_by_desc(rounds::Column::PlayDate)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Self::model_to_round)
            .collect()
    }
}
