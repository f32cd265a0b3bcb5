use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    QueryOrder,
};

pub struct ProgrammeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgrammeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<entity::programme::Model, DbErr> {
        let programme = entity::programme::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        programme.insert(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::programme::Model>, DbErr> {
        entity::prelude::Programme::find()
            .order_by_asc(entity::programme::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, programme_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Programme::delete_by_id(programme_id)
            .exec(self.db)
            .await
    }
}
