//! Use-case services. Each holds the repositories it needs behind `Arc<dyn Trait>`.
use std::sync::Arc;

use configs::AuthConfig;
use sea_orm::DatabaseConnection;

mod catalog;
mod customers;
mod sales_people;
mod cars;
mod purchases;

pub use catalog::{AccessoryService, BrandService, ColorService, InsuranceService, ModelService};
pub use customers::CustomerService;
pub use sales_people::SalesPersonService;
pub use cars::CarService;
pub use purchases::PurchaseService;

use crate::repository::{Repositories, SeaOrmRepository};

/// Every service, wired to one storage backend.
#[derive(Clone)]
pub struct Services {
    pub brands: BrandService,
    pub models: ModelService,
    pub colors: ColorService,
    pub accessories: AccessoryService,
    pub insurances: InsuranceService,
    pub customers: CustomerService,
    pub sales_people: SalesPersonService,
    pub cars: CarService,
    pub purchases: PurchaseService,
}

impl Services {
    pub fn from_repository<R: Repositories>(repo: Arc<R>, auth: AuthConfig) -> Self {
        Self {
            brands: BrandService::new(repo.clone()),
            models: ModelService::new(repo.clone(), repo.clone()),
            colors: ColorService::new(repo.clone()),
            accessories: AccessoryService::new(repo.clone()),
            insurances: InsuranceService::new(repo.clone()),
            customers: CustomerService::new(repo.clone()),
            sales_people: SalesPersonService::new(repo.clone(), auth),
            cars: CarService::new(
                repo.clone(),
                repo.clone(),
                repo.clone(),
                repo.clone(),
                repo.clone(),
                repo.clone(),
                repo.clone(),
            ),
            purchases: PurchaseService::new(repo.clone(), repo),
        }
    }

    pub fn seaorm(db: DatabaseConnection, auth: AuthConfig) -> Self {
        Self::from_repository(Arc::new(SeaOrmRepository::new(db)), auth)
    }
}

#[cfg(test)]
mod tests;
