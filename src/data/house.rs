use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, ExprTrait, QueryFilter, QueryOrder,
};

pub struct HouseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HouseRepository<'a> {
    /// Creates a new instance of [`HouseRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        gender: &str,
        capacity: i32,
    ) -> Result<entity::house::Model, DbErr> {
        let house = entity::house::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            gender: ActiveValue::Set(gender.to_string()),
            capacity: ActiveValue::Set(capacity),
            current_occupancy: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        house.insert(self.db).await
    }

    pub async fn get_by_id(&self, house_id: i32) -> Result<Option<entity::house::Model>, DbErr> {
        entity::prelude::House::find_by_id(house_id).one(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::house::Model>, DbErr> {
        entity::prelude::House::find()
            .order_by_asc(entity::house::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns all houses whose gender matches, case-insensitively, in
    /// natural query order.
    pub async fn find_by_gender(&self, gender: &str) -> Result<Vec<entity::house::Model>, DbErr> {
        entity::prelude::House::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::house::Column::Gender)))
                    .eq(gender.to_lowercase()),
            )
            .order_by_asc(entity::house::Column::Id)
            .all(self.db)
            .await
    }

    /// Atomically claims one seat in a house.
    ///
    /// The occupancy check and increment happen in a single conditional
    /// update, so two concurrent callers can never both claim the last seat.
    /// Returns false when the house is already at capacity (or unknown).
    pub async fn reserve_seat(&self, house_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::House::update_many()
            .col_expr(
                entity::house::Column::CurrentOccupancy,
                Expr::col(entity::house::Column::CurrentOccupancy).add(1),
            )
            .filter(entity::house::Column::Id.eq(house_id))
            .filter(
                Expr::col(entity::house::Column::CurrentOccupancy)
                    .lt(Expr::col(entity::house::Column::Capacity)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Releases one previously claimed seat. The occupancy never drops below
    /// zero. Returns false when nothing was released.
    pub async fn release_seat(&self, house_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::House::update_many()
            .col_expr(
                entity::house::Column::CurrentOccupancy,
                Expr::col(entity::house::Column::CurrentOccupancy).sub(1),
            )
            .filter(entity::house::Column::Id.eq(house_id))
            .filter(Expr::col(entity::house::Column::CurrentOccupancy).gt(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn update(
        &self,
        house_id: i32,
        name: &str,
        gender: &str,
        capacity: i32,
    ) -> Result<Option<entity::house::Model>, DbErr> {
        let Some(house) = self.get_by_id(house_id).await? else {
            return Ok(None);
        };

        let mut house: entity::house::ActiveModel = house.into();
        house.name = ActiveValue::Set(name.to_string());
        house.gender = ActiveValue::Set(gender.to_string());
        house.capacity = ActiveValue::Set(capacity);

        Ok(Some(house.update(self.db).await?))
    }

    /// Deletes a house. Candidates already linked to it are not re-assigned.
    pub async fn delete(&self, house_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::House::delete_by_id(house_id)
            .exec(self.db)
            .await
    }
}
