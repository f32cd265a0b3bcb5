use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    QueryOrder,
};

pub struct DocumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str, url: &str) -> Result<entity::document::Model, DbErr> {
        let document = entity::document::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            url: ActiveValue::Set(url.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        document.insert(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::document::Model>, DbErr> {
        entity::prelude::Document::find()
            .order_by_asc(entity::document::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, document_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Document::delete_by_id(document_id)
            .exec(self.db)
            .await
    }
}
