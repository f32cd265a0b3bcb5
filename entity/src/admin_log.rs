use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only admin activity record; never mutated or deleted by the system.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub activity_details: String,
    pub time_in: DateTime,
    pub time_out: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
