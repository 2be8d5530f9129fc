//! In-process backend. All state sits behind one async mutex, so every call is serialized.
//!
//! Uniqueness and foreign keys are enforced the way the database schema would, so service
//! tests observe the same failures they would against PostgreSQL.
use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use uuid::Uuid;

use models::{accessory, brand, car, car_model, color, customer, insurance, purchase, sales_person};

use super::{
    AccessoryRepository, BrandRepository, CarRecord, CarRepository, ColorRepository, CustomerRepository,
    InsuranceRepository, ModelRecord, ModelRepository, PurchaseRepository, RepoResult, SalesPersonRepository,
};
use crate::errors::ServiceError;
use crate::resources::{AccessoryCreate, BrandCreate, CarFilter, ColorCreate, CustomerCreate, InsuranceCreate};

#[derive(Default)]
struct State {
    brands: BTreeMap<Uuid, brand::Model>,
    models: BTreeMap<Uuid, car_model::Model>,
    model_colors: HashMap<Uuid, Vec<Uuid>>,
    colors: BTreeMap<Uuid, color::Model>,
    accessories: BTreeMap<Uuid, accessory::Model>,
    insurances: BTreeMap<Uuid, insurance::Model>,
    customers: BTreeMap<Uuid, customer::Model>,
    sales_people: BTreeMap<Uuid, sales_person::Model>,
    cars: Vec<car::Model>,
    car_accessories: HashMap<Uuid, Vec<Uuid>>,
    car_insurances: HashMap<Uuid, Vec<Uuid>>,
    purchases: Vec<purchase::Model>,
}

fn unique_violation(table: &str, column: &str) -> ServiceError {
    ServiceError::Db(format!("duplicate key value violates unique constraint on {table}.{column}"))
}

fn fk_violation(table: &str, column: &str) -> ServiceError {
    ServiceError::Db(format!("insert on {table} violates foreign key constraint on {column}"))
}

fn take<T>(items: impl Iterator<Item = T>, limit: Option<u64>) -> Vec<T> {
    match limit {
        Some(n) => items.take(n as usize).collect(),
        None => items.collect(),
    }
}

impl State {
    fn model_record(&self, id: Uuid) -> RepoResult<ModelRecord> {
        let model = self.models.get(&id).cloned().ok_or_else(|| ServiceError::Internal(format!("model {id} missing")))?;
        let brand = self
            .brands
            .get(&model.brand_id)
            .cloned()
            .ok_or_else(|| ServiceError::Internal(format!("brand {} missing", model.brand_id)))?;
        let mut colors: Vec<color::Model> = self
            .model_colors
            .get(&id)
            .into_iter()
            .flatten()
            .filter_map(|c| self.colors.get(c).cloned())
            .collect();
        colors.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(ModelRecord { model, brand, colors })
    }

    fn car_record(&self, car: &car::Model) -> RepoResult<CarRecord> {
        let missing = |what: &str| ServiceError::Internal(format!("car {} references a missing {what}", car.id));
        let mut accessories: Vec<accessory::Model> = self
            .car_accessories
            .get(&car.id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.accessories.get(id).cloned())
            .collect();
        accessories.sort_by(|a, b| a.name.cmp(&b.name));
        let mut insurances: Vec<insurance::Model> = self
            .car_insurances
            .get(&car.id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.insurances.get(id).cloned())
            .collect();
        insurances.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(CarRecord {
            car: car.clone(),
            model: self.model_record(car.models_id)?,
            color: self.colors.get(&car.colors_id).cloned().ok_or_else(|| missing("color"))?,
            customer: self.customers.get(&car.customers_id).cloned().ok_or_else(|| missing("customer"))?,
            sales_person: self.sales_people.get(&car.sales_people_id).cloned().ok_or_else(|| missing("sales person"))?,
            accessories,
            insurances,
            is_purchased: self.purchases.iter().any(|p| p.cars_id == car.id),
        })
    }

    fn car_references_customer(&self, id: Uuid) -> bool {
        self.cars.iter().any(|c| c.customers_id == id)
    }
}

#[derive(Default)]
pub struct InMemoryRepository {
    state: Mutex<State>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a model offered in `color_ids`. Models have no create operation of their own.
    pub async fn seed_model(&self, name: &str, price: f64, brand_id: Uuid, color_ids: &[Uuid]) -> RepoResult<car_model::Model> {
        let mut st = self.state.lock().await;
        if !st.brands.contains_key(&brand_id) {
            return Err(fk_violation("models", "brand_id"));
        }
        if let Some(missing) = color_ids.iter().find(|c| !st.colors.contains_key(*c)) {
            return Err(fk_violation("models_has_colors", &format!("colors_id {missing}")));
        }
        if st.models.values().any(|m| m.name == name) {
            return Err(unique_violation("models", "name"));
        }
        let m = car_model::Model { id: Uuid::new_v4(), name: name.to_string(), price, brand_id };
        st.models.insert(m.id, m.clone());
        st.model_colors.insert(m.id, color_ids.to_vec());
        Ok(m)
    }

    /// Override a car's deadline, e.g. to simulate an expired offer.
    pub async fn set_purchase_deadline(&self, car_id: Uuid, deadline: NaiveDate) -> RepoResult<()> {
        let mut st = self.state.lock().await;
        let car = st
            .cars
            .iter_mut()
            .find(|c| c.id == car_id)
            .ok_or_else(|| ServiceError::not_found("Car", car_id))?;
        car.purchase_deadline = deadline;
        Ok(())
    }
}

#[async_trait]
impl BrandRepository for InMemoryRepository {
    async fn get_all(&self) -> RepoResult<Vec<brand::Model>> {
        let st = self.state.lock().await;
        let mut all: Vec<_> = st.brands.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<brand::Model>> {
        Ok(self.state.lock().await.brands.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> RepoResult<Option<brand::Model>> {
        Ok(self.state.lock().await.brands.values().find(|b| b.name == name).cloned())
    }

    async fn create(&self, input: &BrandCreate) -> RepoResult<brand::Model> {
        let mut st = self.state.lock().await;
        if st.brands.values().any(|b| b.name == input.name) {
            return Err(unique_violation("brands", "name"));
        }
        let b = brand::Model { id: Uuid::new_v4(), name: input.name.clone(), logo_url: input.logo_url.clone() };
        st.brands.insert(b.id, b.clone());
        Ok(b)
    }

    async fn update(&self, b: brand::Model) -> RepoResult<brand::Model> {
        let mut st = self.state.lock().await;
        if st.brands.values().any(|o| o.id != b.id && o.name == b.name) {
            return Err(unique_violation("brands", "name"));
        }
        st.brands.insert(b.id, b.clone());
        Ok(b)
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut st = self.state.lock().await;
        if st.models.values().any(|m| m.brand_id == id) {
            return Err(fk_violation("models", "brand_id"));
        }
        st.brands.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ModelRepository for InMemoryRepository {
    async fn get_all(&self, brand_id: Option<Uuid>) -> RepoResult<Vec<ModelRecord>> {
        let st = self.state.lock().await;
        let mut records = st
            .models
            .values()
            .filter(|m| brand_id.map_or(true, |b| m.brand_id == b))
            .map(|m| st.model_record(m.id))
            .collect::<RepoResult<Vec<_>>>()?;
        records.sort_by(|a, b| a.model.name.cmp(&b.model.name));
        Ok(records)
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<ModelRecord>> {
        let st = self.state.lock().await;
        if !st.models.contains_key(&id) {
            return Ok(None);
        }
        st.model_record(id).map(Some)
    }
}

#[async_trait]
impl ColorRepository for InMemoryRepository {
    async fn get_all(&self) -> RepoResult<Vec<color::Model>> {
        let st = self.state.lock().await;
        let mut all: Vec<_> = st.colors.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<color::Model>> {
        Ok(self.state.lock().await.colors.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> RepoResult<Option<color::Model>> {
        Ok(self.state.lock().await.colors.values().find(|c| c.name == name).cloned())
    }

    async fn create(&self, input: &ColorCreate) -> RepoResult<color::Model> {
        let mut st = self.state.lock().await;
        if st.colors.values().any(|c| c.name == input.name) {
            return Err(unique_violation("colors", "name"));
        }
        let c = color::Model {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            price: input.price,
            red_value: input.red_value,
            green_value: input.green_value,
            blue_value: input.blue_value,
        };
        st.colors.insert(c.id, c.clone());
        Ok(c)
    }
}

#[async_trait]
impl AccessoryRepository for InMemoryRepository {
    async fn get_all(&self, limit: Option<u64>) -> RepoResult<Vec<accessory::Model>> {
        let st = self.state.lock().await;
        let mut all: Vec<_> = st.accessories.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(take(all.into_iter(), limit))
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<accessory::Model>> {
        Ok(self.state.lock().await.accessories.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> RepoResult<Option<accessory::Model>> {
        Ok(self.state.lock().await.accessories.values().find(|a| a.name == name).cloned())
    }

    async fn create(&self, input: &AccessoryCreate) -> RepoResult<accessory::Model> {
        let mut st = self.state.lock().await;
        if st.accessories.values().any(|a| a.name == input.name) {
            return Err(unique_violation("accessories", "name"));
        }
        let a = accessory::Model { id: Uuid::new_v4(), name: input.name.clone(), price: input.price };
        st.accessories.insert(a.id, a.clone());
        Ok(a)
    }

    async fn update(&self, a: accessory::Model) -> RepoResult<accessory::Model> {
        let mut st = self.state.lock().await;
        if st.accessories.values().any(|o| o.id != a.id && o.name == a.name) {
            return Err(unique_violation("accessories", "name"));
        }
        st.accessories.insert(a.id, a.clone());
        Ok(a)
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut st = self.state.lock().await;
        if st.car_accessories.values().any(|ids| ids.contains(&id)) {
            return Err(fk_violation("cars_has_accessories", "accessories_id"));
        }
        st.accessories.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl InsuranceRepository for InMemoryRepository {
    async fn get_all(&self, limit: Option<u64>) -> RepoResult<Vec<insurance::Model>> {
        let st = self.state.lock().await;
        let mut all: Vec<_> = st.insurances.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(take(all.into_iter(), limit))
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<insurance::Model>> {
        Ok(self.state.lock().await.insurances.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> RepoResult<Option<insurance::Model>> {
        Ok(self.state.lock().await.insurances.values().find(|i| i.name == name).cloned())
    }

    async fn create(&self, input: &InsuranceCreate) -> RepoResult<insurance::Model> {
        let mut st = self.state.lock().await;
        if st.insurances.values().any(|i| i.name == input.name) {
            return Err(unique_violation("insurances", "name"));
        }
        let i = insurance::Model { id: Uuid::new_v4(), name: input.name.clone(), price: input.price };
        st.insurances.insert(i.id, i.clone());
        Ok(i)
    }

    async fn update(&self, i: insurance::Model) -> RepoResult<insurance::Model> {
        let mut st = self.state.lock().await;
        if st.insurances.values().any(|o| o.id != i.id && o.name == i.name) {
            return Err(unique_violation("insurances", "name"));
        }
        st.insurances.insert(i.id, i.clone());
        Ok(i)
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut st = self.state.lock().await;
        if st.car_insurances.values().any(|ids| ids.contains(&id)) {
            return Err(fk_violation("cars_has_insurances", "insurances_id"));
        }
        st.insurances.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryRepository {
    async fn get_all(&self, email_filter: Option<&str>, limit: Option<u64>) -> RepoResult<Vec<customer::Model>> {
        let st = self.state.lock().await;
        let needle = email_filter.map(str::to_lowercase);
        let mut all: Vec<_> = st
            .customers
            .values()
            .filter(|c| needle.as_deref().map_or(true, |n| c.email.to_lowercase().contains(n)))
            .cloned()
            .collect();
        all.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(take(all.into_iter(), limit))
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<customer::Model>> {
        Ok(self.state.lock().await.customers.get(&id).cloned())
    }

    async fn is_email_taken(&self, email: &str, exclude: Option<Uuid>) -> RepoResult<bool> {
        let st = self.state.lock().await;
        Ok(st.customers.values().any(|c| c.email == email && Some(c.id) != exclude))
    }

    async fn create(&self, input: &CustomerCreate) -> RepoResult<customer::Model> {
        let mut st = self.state.lock().await;
        if st.customers.values().any(|c| c.email == input.email) {
            return Err(unique_violation("customers", "email"));
        }
        let c = customer::Model {
            id: Uuid::new_v4(),
            email: input.email.clone(),
            phone_number: input.phone_number.clone(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            address: input.address.clone(),
        };
        st.customers.insert(c.id, c.clone());
        Ok(c)
    }

    async fn update(&self, c: customer::Model) -> RepoResult<customer::Model> {
        let mut st = self.state.lock().await;
        if st.customers.values().any(|o| o.id != c.id && o.email == c.email) {
            return Err(unique_violation("customers", "email"));
        }
        st.customers.insert(c.id, c.clone());
        Ok(c)
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut st = self.state.lock().await;
        if st.car_references_customer(id) {
            return Err(fk_violation("cars", "customers_id"));
        }
        st.customers.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl SalesPersonRepository for InMemoryRepository {
    async fn get_all(&self) -> RepoResult<Vec<sales_person::Model>> {
        let st = self.state.lock().await;
        let mut all: Vec<_> = st.sales_people.values().cloned().collect();
        all.sort_by(|a, b| (&a.last_name, &a.first_name).cmp(&(&b.last_name, &b.first_name)));
        Ok(all)
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<sales_person::Model>> {
        Ok(self.state.lock().await.sales_people.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> RepoResult<Option<sales_person::Model>> {
        Ok(self.state.lock().await.sales_people.values().find(|s| s.email == email).cloned())
    }

    async fn create(
        &self,
        email: &str,
        hashed_password: String,
        first_name: &str,
        last_name: &str,
    ) -> RepoResult<sales_person::Model> {
        let mut st = self.state.lock().await;
        if st.sales_people.values().any(|s| s.email == email) {
            return Err(unique_violation("sales_people", "email"));
        }
        let s = sales_person::Model {
            id: Uuid::new_v4(),
            email: email.to_string(),
            hashed_password,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        st.sales_people.insert(s.id, s.clone());
        Ok(s)
    }
}

#[async_trait]
impl CarRepository for InMemoryRepository {
    async fn get_all(&self, filter: &CarFilter, today: NaiveDate) -> RepoResult<Vec<CarRecord>> {
        let st = self.state.lock().await;
        let mut cars: Vec<&car::Model> = st
            .cars
            .iter()
            .filter(|c| filter.customer_id.map_or(true, |id| c.customers_id == id))
            .filter(|c| filter.sales_person_id.map_or(true, |id| c.sales_people_id == id))
            .filter(|c| {
                filter
                    .is_purchased
                    .map_or(true, |want| st.purchases.iter().any(|p| p.cars_id == c.id) == want)
            })
            .filter(|c| filter.is_past_purchase_deadline.map_or(true, |want| (c.purchase_deadline < today) == want))
            .collect();
        cars.sort_by_key(|c| c.purchase_deadline);
        cars.into_iter().map(|c| st.car_record(c)).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<CarRecord>> {
        let st = self.state.lock().await;
        match st.cars.iter().find(|c| c.id == id) {
            Some(c) => st.car_record(c).map(Some),
            None => Ok(None),
        }
    }

    async fn create(&self, new: &car::NewCar) -> RepoResult<CarRecord> {
        let mut st = self.state.lock().await;
        // Check every reference before touching state so a failure leaves nothing behind
        if !st.models.contains_key(&new.models_id) {
            return Err(fk_violation("cars", "models_id"));
        }
        if !st.colors.contains_key(&new.colors_id) {
            return Err(fk_violation("cars", "colors_id"));
        }
        if !st.customers.contains_key(&new.customers_id) {
            return Err(fk_violation("cars", "customers_id"));
        }
        if !st.sales_people.contains_key(&new.sales_people_id) {
            return Err(fk_violation("cars", "sales_people_id"));
        }
        if new.accessory_ids.iter().any(|id| !st.accessories.contains_key(id)) {
            return Err(fk_violation("cars_has_accessories", "accessories_id"));
        }
        if new.insurance_ids.iter().any(|id| !st.insurances.contains_key(id)) {
            return Err(fk_violation("cars_has_insurances", "insurances_id"));
        }

        let created = car::Model {
            id: Uuid::new_v4(),
            total_price: new.total_price,
            purchase_deadline: new.purchase_deadline,
            models_id: new.models_id,
            colors_id: new.colors_id,
            customers_id: new.customers_id,
            sales_people_id: new.sales_people_id,
        };
        st.car_accessories.insert(created.id, new.accessory_ids.clone());
        st.car_insurances.insert(created.id, new.insurance_ids.clone());
        st.cars.push(created.clone());
        st.car_record(&created)
    }
}

#[async_trait]
impl PurchaseRepository for InMemoryRepository {
    async fn get_all(&self, limit: Option<u64>) -> RepoResult<Vec<purchase::Model>> {
        let st = self.state.lock().await;
        let mut all = st.purchases.clone();
        all.sort_by(|a, b| b.date_of_purchase.cmp(&a.date_of_purchase));
        Ok(take(all.into_iter(), limit))
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<purchase::Model>> {
        Ok(self.state.lock().await.purchases.iter().find(|p| p.id == id).cloned())
    }

    async fn get_by_car_id(&self, cars_id: Uuid) -> RepoResult<Option<purchase::Model>> {
        Ok(self.state.lock().await.purchases.iter().find(|p| p.cars_id == cars_id).cloned())
    }

    async fn create(&self, cars_id: Uuid, date_of_purchase: NaiveDate) -> RepoResult<purchase::Model> {
        let mut st = self.state.lock().await;
        if !st.cars.iter().any(|c| c.id == cars_id) {
            return Err(fk_violation("purchases", "cars_id"));
        }
        if st.purchases.iter().any(|p| p.cars_id == cars_id) {
            return Err(unique_violation("purchases", "cars_id"));
        }
        let p = purchase::Model { id: Uuid::new_v4(), cars_id, date_of_purchase };
        st.purchases.push(p.clone());
        Ok(p)
    }
}
