use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One payment attempt. Status moves pending -> completed | failed and never
/// transitions backward.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub client_reference: String,
    pub index_number: String,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub status: String,
    /// Checkout handle returned by the payment provider.
    pub checkout_id: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
