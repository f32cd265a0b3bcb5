pub use sea_orm_migration::prelude::*;

mod m20260826_000001_candidate;
mod m20260826_000002_house;
mod m20260826_000003_payment;
mod m20260826_000004_programme;
mod m20260826_000005_school_class;
mod m20260826_000006_document;
mod m20260826_000007_admin_user;
mod m20260826_000008_admin_log;
mod m20260826_000009_candidate_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260826_000001_candidate::Migration),
            Box::new(m20260826_000002_house::Migration),
            Box::new(m20260826_000003_payment::Migration),
            Box::new(m20260826_000004_programme::Migration),
            Box::new(m20260826_000005_school_class::Migration),
            Box::new(m20260826_000006_document::Migration),
            Box::new(m20260826_000007_admin_user::Migration),
            Box::new(m20260826_000008_admin_log::Migration),
            Box::new(m20260826_000009_candidate_log::Migration),
        ]
    }
}
