use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    /// Creates a new instance of [`PaymentRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new payment attempt in the pending state.
    pub async fn create(
        &self,
        client_reference: &str,
        index_number: &str,
        amount: f64,
        checkout_id: Option<&str>,
    ) -> Result<entity::payment::Model, DbErr> {
        let payment = entity::payment::ActiveModel {
            client_reference: ActiveValue::Set(client_reference.to_string()),
            index_number: ActiveValue::Set(index_number.to_string()),
            amount: ActiveValue::Set(amount),
            status: ActiveValue::Set("pending".to_string()),
            checkout_id: ActiveValue::Set(checkout_id.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        payment.insert(self.db).await
    }

    pub async fn find_by_client_reference(
        &self,
        client_reference: &str,
    ) -> Result<Option<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::ClientReference.eq(client_reference))
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .order_by_desc(entity::payment::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Moves a payment into a terminal state. Re-saving the same terminal
    /// status is a no-op by construction, so repeated status checks are safe.
    pub async fn set_status(
        &self,
        client_reference: &str,
        status: &str,
    ) -> Result<Option<entity::payment::Model>, DbErr> {
        let Some(payment) = self.find_by_client_reference(client_reference).await? else {
            return Ok(None);
        };

        let mut payment: entity::payment::ActiveModel = payment.into();
        payment.status = ActiveValue::Set(status.to_string());

        Ok(Some(payment.update(self.db).await?))
    }
}
