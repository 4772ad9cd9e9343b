pub use sea_orm_migration::prelude::*;

mod m20250619_000001_create_statuses;
mod m20250619_000002_create_categories;
mod m20250619_000003_create_users;
mod m20250619_000004_create_tasks;
mod m20250619_000005_seed_reference_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250619_000001_create_statuses::Migration),
            Box::new(m20250619_000002_create_categories::Migration),
            Box::new(m20250619_000003_create_users::Migration),
            Box::new(m20250619_000004_create_tasks::Migration),
            Box::new(m20250619_000005_seed_reference_data::Migration),
        ]
    }
}
