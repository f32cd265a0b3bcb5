use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct AdminUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminUserRepository<'a> {
    /// Creates a new instance of [`AdminUserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new admin user. The password must already be hashed.
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<entity::admin_user::Model, DbErr> {
        let admin = entity::admin_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password: ActiveValue::Set(password_hash.to_string()),
            role: ActiveValue::Set(role.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        admin.insert(self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::admin_user::Model>, DbErr> {
        entity::prelude::AdminUser::find()
            .filter(entity::admin_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        admin_id: i32,
    ) -> Result<Option<entity::admin_user::Model>, DbErr> {
        entity::prelude::AdminUser::find_by_id(admin_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::admin_user::Model>, DbErr> {
        entity::prelude::AdminUser::find()
            .order_by_asc(entity::admin_user::Column::Username)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, admin_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AdminUser::delete_by_id(admin_id)
            .exec(self.db)
            .await
    }
}
