pub use sea_orm_migration::prelude::*;

pub mod iden;
mod m20250110_000001_create_table;
mod m20250112_091500_user_table;
mod m20250214_103000_add_archive_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_000001_create_table::Migration),
            Box::new(m20250112_091500_user_table::Migration),
            Box::new(m20250214_103000_add_archive_tables::Migration),
        ]
    }
}
