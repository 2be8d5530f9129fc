//! Migrator registering dealership tables in foreign-key order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_brands;
mod m20240101_000002_create_colors;
mod m20240101_000003_create_models;
mod m20240101_000004_create_models_has_colors;
mod m20240101_000005_create_accessories;
mod m20240101_000006_create_insurances;
mod m20240101_000007_create_customers;
mod m20240101_000008_create_sales_people;
mod m20240101_000009_create_cars;
mod m20240101_000010_create_cars_has_accessories;
mod m20240101_000011_create_cars_has_insurances;
mod m20240101_000012_create_purchases;
mod m20240101_000020_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_brands::Migration),
            Box::new(m20240101_000002_create_colors::Migration),
            Box::new(m20240101_000003_create_models::Migration),
            Box::new(m20240101_000004_create_models_has_colors::Migration),
            Box::new(m20240101_000005_create_accessories::Migration),
            Box::new(m20240101_000006_create_insurances::Migration),
            Box::new(m20240101_000007_create_customers::Migration),
            Box::new(m20240101_000008_create_sales_people::Migration),
            Box::new(m20240101_000009_create_cars::Migration),
            Box::new(m20240101_000010_create_cars_has_accessories::Migration),
            Box::new(m20240101_000011_create_cars_has_insurances::Migration),
            Box::new(m20240101_000012_create_purchases::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000020_add_indexes::Migration),
        ]
    }
}
