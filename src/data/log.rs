use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

/// Append-only activity records. Nothing here is ever mutated or deleted by
/// the system itself.
pub struct AdminLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        activity_details: &str,
    ) -> Result<entity::admin_log::Model, DbErr> {
        let log = entity::admin_log::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            activity_details: ActiveValue::Set(activity_details.to_string()),
            time_in: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        log.insert(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::admin_log::Model>, DbErr> {
        entity::prelude::AdminLog::find()
            .order_by_desc(entity::admin_log::Column::TimeIn)
            .all(self.db)
            .await
    }
}

pub struct CandidateLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CandidateLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        activity_details: &str,
    ) -> Result<entity::candidate_log::Model, DbErr> {
        let log = entity::candidate_log::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            activity_details: ActiveValue::Set(activity_details.to_string()),
            time_in: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        log.insert(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::candidate_log::Model>, DbErr> {
        entity::prelude::CandidateLog::find()
            .order_by_desc(entity::candidate_log::Column::TimeIn)
            .all(self.db)
            .await
    }
}
