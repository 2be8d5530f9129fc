//! Car registration: referential checks across entities, the purchase-deadline window,
//! total price, then one transactional insert.
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use models::car;

use crate::errors::ServiceError;
use crate::repository::{
    AccessoryRepository, CarRecord, CarRepository, ColorRepository, CustomerRepository, InsuranceRepository,
    ModelRepository, SalesPersonRepository,
};
use crate::resources::{CarCreate, CarFilter, CarResource};

impl From<CarRecord> for CarResource {
    fn from(r: CarRecord) -> Self {
        Self {
            id: r.car.id,
            total_price: r.car.total_price,
            purchase_deadline: r.car.purchase_deadline,
            model: r.model.into(),
            color: r.color.into(),
            customer: r.customer.into(),
            sales_person: r.sales_person.into(),
            accessories: r.accessories.into_iter().map(Into::into).collect(),
            insurances: r.insurances.into_iter().map(Into::into).collect(),
            is_purchased: r.is_purchased,
        }
    }
}

#[derive(Clone)]
pub struct CarService {
    cars: Arc<dyn CarRepository>,
    models: Arc<dyn ModelRepository>,
    colors: Arc<dyn ColorRepository>,
    customers: Arc<dyn CustomerRepository>,
    sales_people: Arc<dyn SalesPersonRepository>,
    accessories: Arc<dyn AccessoryRepository>,
    insurances: Arc<dyn InsuranceRepository>,
}

impl CarService {
    pub fn new(
        cars: Arc<dyn CarRepository>,
        models: Arc<dyn ModelRepository>,
        colors: Arc<dyn ColorRepository>,
        customers: Arc<dyn CustomerRepository>,
        sales_people: Arc<dyn SalesPersonRepository>,
        accessories: Arc<dyn AccessoryRepository>,
        insurances: Arc<dyn InsuranceRepository>,
    ) -> Self {
        Self { cars, models, colors, customers, sales_people, accessories, insurances }
    }

    /// List cars. A customer or sales person named in the filter must exist.
    pub async fn get_all(&self, filter: &CarFilter) -> Result<Vec<CarResource>, ServiceError> {
        self.get_all_on(filter, Utc::now().date_naive()).await
    }

    pub async fn get_all_on(&self, filter: &CarFilter, today: NaiveDate) -> Result<Vec<CarResource>, ServiceError> {
        if let Some(id) = filter.customer_id {
            if self.customers.get_by_id(id).await?.is_none() {
                return Err(ServiceError::not_found("Customer", id));
            }
        }
        if let Some(id) = filter.sales_person_id {
            if self.sales_people.get_by_id(id).await?.is_none() {
                return Err(ServiceError::not_found("Sales person", id));
            }
        }
        Ok(self.cars.get_all(filter, today).await?.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CarResource, ServiceError> {
        self.cars
            .get_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ServiceError::not_found("Car", id))
    }

    pub async fn create(&self, input: CarCreate) -> Result<CarResource, ServiceError> {
        self.create_on(input, Utc::now().date_naive()).await
    }

    /// Register a car as of `today`.
    ///
    /// Checks run in a fixed order and the first failure wins: field rules, deadline window,
    /// customer, sales person, model, color, each accessory, each insurance, then whether
    /// the model is offered in the color.
    #[instrument(skip(self, input), fields(model_id = %input.models_id, color_id = %input.colors_id))]
    pub async fn create_on(&self, input: CarCreate, today: NaiveDate) -> Result<CarResource, ServiceError> {
        input.validate()?;
        let purchase_deadline = car::resolve_purchase_deadline(input.purchase_deadline, today)?;

        let customer = self
            .customers
            .get_by_id(input.customers_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Customer", input.customers_id))?;
        let sales_person = self
            .sales_people
            .get_by_id(input.sales_people_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Sales person", input.sales_people_id))?;
        let model = self
            .models
            .get_by_id(input.models_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Model", input.models_id))?;
        let color = self
            .colors
            .get_by_id(input.colors_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Color", input.colors_id))?;

        let mut accessory_prices = Vec::with_capacity(input.accessory_ids.len());
        for id in &input.accessory_ids {
            let found = self.accessories.get_by_id(*id).await?.ok_or_else(|| ServiceError::not_found("Accessory", *id))?;
            accessory_prices.push(found.price);
        }
        let mut insurance_prices = Vec::with_capacity(input.insurance_ids.len());
        for id in &input.insurance_ids {
            let found = self.insurances.get_by_id(*id).await?.ok_or_else(|| ServiceError::not_found("Insurance", *id))?;
            insurance_prices.push(found.price);
        }

        if !model.colors.iter().any(|c| c.id == color.id) {
            return Err(ServiceError::ColorNotOfferedByModel {
                model: model.model.name,
                color: color.name,
                offered: model.colors.into_iter().map(|c| c.name).collect(),
            });
        }

        let new = car::NewCar {
            models_id: model.model.id,
            colors_id: color.id,
            customers_id: customer.id,
            sales_people_id: sales_person.id,
            total_price: car::total_price(model.model.price, color.price, accessory_prices, insurance_prices),
            accessory_ids: input.accessory_ids,
            insurance_ids: input.insurance_ids,
            purchase_deadline,
        };
        let created = self.cars.create(&new).await?;
        info!(
            car_id = %created.car.id,
            customer_id = %customer.id,
            sales_person_id = %sales_person.id,
            total_price = created.car.total_price,
            "car_created"
        );
        Ok(created.into())
    }
}
