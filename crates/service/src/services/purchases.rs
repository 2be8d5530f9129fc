use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use models::purchase;

use crate::errors::ServiceError;
use crate::repository::{CarRepository, PurchaseRepository};
use crate::resources::{PurchaseCreate, PurchaseResource};

#[derive(Clone)]
pub struct PurchaseService {
    repo: Arc<dyn PurchaseRepository>,
    cars: Arc<dyn CarRepository>,
}

impl PurchaseService {
    pub fn new(repo: Arc<dyn PurchaseRepository>, cars: Arc<dyn CarRepository>) -> Self { Self { repo, cars } }

    pub async fn get_all(&self, limit: Option<u64>) -> Result<Vec<PurchaseResource>, ServiceError> {
        Ok(self.repo.get_all(limit).await?.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<PurchaseResource, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ServiceError::not_found("Purchase", id))
    }

    pub async fn create(&self, input: PurchaseCreate) -> Result<PurchaseResource, ServiceError> {
        self.create_on(input, Utc::now().date_naive()).await
    }

    /// Purchase a car on `today`. A car is purchased at most once, on or before its deadline.
    #[instrument(skip(self, input), fields(car_id = %input.cars_id))]
    pub async fn create_on(&self, input: PurchaseCreate, today: NaiveDate) -> Result<PurchaseResource, ServiceError> {
        let car = self
            .cars
            .get_by_id(input.cars_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Car", input.cars_id))?;
        if self.repo.get_by_car_id(car.car.id).await?.is_some() {
            return Err(ServiceError::already_taken("Purchase", "cars_id", car.car.id.to_string()));
        }
        purchase::validate_purchase_date(car.car.purchase_deadline, today).map_err(|_| {
            ServiceError::PurchaseDeadlinePassed { car_id: car.car.id, deadline: car.car.purchase_deadline }
        })?;
        let created = self.repo.create(car.car.id, today).await?;
        info!(purchase_id = %created.id, "car_purchased");
        Ok(created.into())
    }
}
