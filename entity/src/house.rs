use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Dormitory unit with a fixed seat ceiling. `current_occupancy` is only
/// mutated through the conditional reserve/release queries so it never
/// exceeds `capacity`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "house")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// "Male" or "Female"; restricts which candidates may be placed here.
    pub gender: String,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
