use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub username: String,
    pub current_daily_streak: i32,
    pub last_day_played: String,
    pub total_plays: i32,
    pub total_wins: i32,
    pub total_days_played: i32,
    pub utc_offset_minutes: i32,
    // JSON-encoded `Vec<UserSportStats>`
    #[sea_orm(column_type = "Text")]
    pub sports: String,
    // JSON-encoded `Vec<StoryMission>`
    #[sea_orm(column_type = "Text")]
    pub story_missions: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
