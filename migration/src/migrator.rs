use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202503100001_create_users::Migration),
            Box::new(migrations::m202503100002_create_rayons::Migration),
            Box::new(migrations::m202503100003_create_products::Migration),
            Box::new(migrations::m202503100004_create_sales::Migration),
        ]
    }
}
