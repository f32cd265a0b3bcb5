use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Admission record for one applicant, keyed by the externally-issued exam
/// index number. House link, credentials, and application number are all
/// optional and set at different points of the admission workflow.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "candidate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub index_number: String,
    pub surname: String,
    pub other_names: String,
    pub gender: Option<String>,
    pub programme: Option<String>,
    pub residence: Option<String>,
    pub aggregate: Option<i32>,
    pub fee_paid: bool,
    #[sea_orm(unique, nullable)]
    pub serial_number: Option<String>,
    /// bcrypt hash of the PIN; the plaintext is only ever sent by SMS.
    pub pin: Option<String>,
    pub phone_number: Option<String>,
    pub house_id: Option<i32>,
    pub house_name: Option<String>,
    #[sea_orm(unique, nullable)]
    pub application_number: Option<String>,
    #[sea_orm(column_type = "Json", nullable)]
    pub guardian_info: Option<Json>,
    #[sea_orm(column_type = "Json", nullable)]
    pub additional_info: Option<Json>,
    #[sea_orm(column_type = "Json", nullable)]
    pub academic_info: Option<Json>,
    #[sea_orm(column_type = "Json", nullable)]
    pub uploads: Option<Json>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
