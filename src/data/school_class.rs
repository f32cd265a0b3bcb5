use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    QueryOrder,
};

pub struct SchoolClassRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchoolClassRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        programme: &str,
    ) -> Result<entity::school_class::Model, DbErr> {
        let class = entity::school_class::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            programme: ActiveValue::Set(programme.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        class.insert(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::school_class::Model>, DbErr> {
        entity::prelude::SchoolClass::find()
            .order_by_asc(entity::school_class::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, class_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SchoolClass::delete_by_id(class_id)
            .exec(self.db)
            .await
    }
}
