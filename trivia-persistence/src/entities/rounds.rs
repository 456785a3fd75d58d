use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rounds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub sport: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub play_date: String,
    // JSON-encoded `Player`
    #[sea_orm(column_type = "Text")]
    pub player: String,
    // JSON-encoded `Stats`
    #[sea_orm(column_type = "Text")]
    pub stats: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
