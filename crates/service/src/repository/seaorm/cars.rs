use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait};
use uuid::Uuid;

use models::{accessory, car, car_model, color, customer, insurance, purchase, sales_person};

use super::SeaOrmRepository;
use crate::errors::ServiceError;
use crate::repository::{CarRecord, CarRepository, PurchaseRepository, RepoResult};
use crate::resources::CarFilter;

fn dangling(car_id: Uuid, what: &str) -> ServiceError {
    ServiceError::Internal(format!("car {car_id} references a missing {what}"))
}

impl SeaOrmRepository {
    async fn car_record(&self, car: car::Model) -> RepoResult<CarRecord> {
        let model = car_model::Entity::find_by_id(car.models_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| dangling(car.id, "model"))?;
        let model = self.model_record(model).await?;
        let color = color::Entity::find_by_id(car.colors_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| dangling(car.id, "color"))?;
        let customer = customer::Entity::find_by_id(car.customers_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| dangling(car.id, "customer"))?;
        let sales_person = sales_person::Entity::find_by_id(car.sales_people_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| dangling(car.id, "sales person"))?;
        let accessories = car
            .find_related(accessory::Entity)
            .order_by_asc(accessory::Column::Name)
            .all(&self.db)
            .await?;
        let insurances = car
            .find_related(insurance::Entity)
            .order_by_asc(insurance::Column::Name)
            .all(&self.db)
            .await?;
        let is_purchased = purchase::find_by_car(&self.db, car.id).await?.is_some();
        Ok(CarRecord { car, model, color, customer, sales_person, accessories, insurances, is_purchased })
    }
}

#[async_trait]
impl CarRepository for SeaOrmRepository {
    async fn get_all(&self, filter: &CarFilter, today: NaiveDate) -> RepoResult<Vec<CarRecord>> {
        let mut query = car::Entity::find().order_by_asc(car::Column::PurchaseDeadline);
        if let Some(id) = filter.customer_id {
            query = query.filter(car::Column::CustomersId.eq(id));
        }
        if let Some(id) = filter.sales_person_id {
            query = query.filter(car::Column::SalesPeopleId.eq(id));
        }
        if let Some(purchased) = filter.is_purchased {
            let purchased_ids = purchase::Entity::find()
                .select_only()
                .column(purchase::Column::CarsId)
                .into_query();
            query = if purchased {
                query.filter(car::Column::Id.in_subquery(purchased_ids))
            } else {
                query.filter(car::Column::Id.not_in_subquery(purchased_ids))
            };
        }
        if let Some(past) = filter.is_past_purchase_deadline {
            query = if past {
                query.filter(car::Column::PurchaseDeadline.lt(today))
            } else {
                query.filter(car::Column::PurchaseDeadline.gte(today))
            };
        }

        let cars = query.all(&self.db).await?;
        let mut records = Vec::with_capacity(cars.len());
        for c in cars {
            records.push(self.car_record(c).await?);
        }
        Ok(records)
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<CarRecord>> {
        match car::Entity::find_by_id(id).one(&self.db).await? {
            Some(c) => Ok(Some(self.car_record(c).await?)),
            None => Ok(None),
        }
    }

    async fn create(&self, new: &car::NewCar) -> RepoResult<CarRecord> {
        let created = car::create(&self.db, new).await?;
        self.car_record(created).await
    }
}

#[async_trait]
impl PurchaseRepository for SeaOrmRepository {
    async fn get_all(&self, limit: Option<u64>) -> RepoResult<Vec<purchase::Model>> {
        let mut query = purchase::Entity::find().order_by_desc(purchase::Column::DateOfPurchase);
        if let Some(n) = limit {
            query = query.limit(n);
        }
        Ok(query.all(&self.db).await?)
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<purchase::Model>> {
        Ok(purchase::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn get_by_car_id(&self, cars_id: Uuid) -> RepoResult<Option<purchase::Model>> {
        Ok(purchase::find_by_car(&self.db, cars_id).await?)
    }

    async fn create(&self, cars_id: Uuid, date_of_purchase: NaiveDate) -> RepoResult<purchase::Model> {
        Ok(purchase::create(&self.db, cars_id, date_of_purchase).await?)
    }
}
