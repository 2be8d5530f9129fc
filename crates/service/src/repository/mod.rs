//! Storage seams. Each entity has one trait; `seaorm` backs them with PostgreSQL and
//! `memory` with an in-process map for tests and local runs.
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use models::{accessory, brand, car, car_model, color, customer, insurance, purchase, sales_person};

use crate::errors::ServiceError;
use crate::resources::{
    AccessoryCreate, BrandCreate, CarFilter, ColorCreate, CustomerCreate, InsuranceCreate,
};

pub mod memory;
pub mod seaorm;

pub use memory::InMemoryRepository;
pub use seaorm::SeaOrmRepository;

pub type RepoResult<T> = Result<T, ServiceError>;

/// A model joined with its brand and offered colors.
#[derive(Debug, Clone)]
pub struct ModelRecord {
    pub model: car_model::Model,
    pub brand: brand::Model,
    pub colors: Vec<color::Model>,
}

/// A car joined with everything it references.
#[derive(Debug, Clone)]
pub struct CarRecord {
    pub car: car::Model,
    pub model: ModelRecord,
    pub color: color::Model,
    pub customer: customer::Model,
    pub sales_person: sales_person::Model,
    pub accessories: Vec<accessory::Model>,
    pub insurances: Vec<insurance::Model>,
    pub is_purchased: bool,
}

#[async_trait]
pub trait BrandRepository: Send + Sync {
    async fn get_all(&self) -> RepoResult<Vec<brand::Model>>;
    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<brand::Model>>;
    async fn get_by_name(&self, name: &str) -> RepoResult<Option<brand::Model>>;
    async fn create(&self, input: &BrandCreate) -> RepoResult<brand::Model>;
    async fn update(&self, brand: brand::Model) -> RepoResult<brand::Model>;
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

#[async_trait]
pub trait ModelRepository: Send + Sync {
    async fn get_all(&self, brand_id: Option<Uuid>) -> RepoResult<Vec<ModelRecord>>;
    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<ModelRecord>>;
}

#[async_trait]
pub trait ColorRepository: Send + Sync {
    async fn get_all(&self) -> RepoResult<Vec<color::Model>>;
    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<color::Model>>;
    async fn get_by_name(&self, name: &str) -> RepoResult<Option<color::Model>>;
    async fn create(&self, input: &ColorCreate) -> RepoResult<color::Model>;
}

#[async_trait]
pub trait AccessoryRepository: Send + Sync {
    async fn get_all(&self, limit: Option<u64>) -> RepoResult<Vec<accessory::Model>>;
    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<accessory::Model>>;
    async fn get_by_name(&self, name: &str) -> RepoResult<Option<accessory::Model>>;
    async fn create(&self, input: &AccessoryCreate) -> RepoResult<accessory::Model>;
    async fn update(&self, accessory: accessory::Model) -> RepoResult<accessory::Model>;
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

#[async_trait]
pub trait InsuranceRepository: Send + Sync {
    async fn get_all(&self, limit: Option<u64>) -> RepoResult<Vec<insurance::Model>>;
    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<insurance::Model>>;
    async fn get_by_name(&self, name: &str) -> RepoResult<Option<insurance::Model>>;
    async fn create(&self, input: &InsuranceCreate) -> RepoResult<insurance::Model>;
    async fn update(&self, insurance: insurance::Model) -> RepoResult<insurance::Model>;
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn get_all(&self, email_filter: Option<&str>, limit: Option<u64>) -> RepoResult<Vec<customer::Model>>;
    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<customer::Model>>;
    /// Whether `email` is used by a customer other than `exclude`.
    async fn is_email_taken(&self, email: &str, exclude: Option<Uuid>) -> RepoResult<bool>;
    async fn create(&self, input: &CustomerCreate) -> RepoResult<customer::Model>;
    async fn update(&self, customer: customer::Model) -> RepoResult<customer::Model>;
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

#[async_trait]
pub trait SalesPersonRepository: Send + Sync {
    async fn get_all(&self) -> RepoResult<Vec<sales_person::Model>>;
    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<sales_person::Model>>;
    async fn get_by_email(&self, email: &str) -> RepoResult<Option<sales_person::Model>>;
    async fn create(
        &self,
        email: &str,
        hashed_password: String,
        first_name: &str,
        last_name: &str,
    ) -> RepoResult<sales_person::Model>;
}

#[async_trait]
pub trait CarRepository: Send + Sync {
    /// `today` decides the past-deadline filter.
    async fn get_all(&self, filter: &CarFilter, today: NaiveDate) -> RepoResult<Vec<CarRecord>>;
    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<CarRecord>>;
    /// Insert the car and its association rows atomically.
    async fn create(&self, new: &car::NewCar) -> RepoResult<CarRecord>;
}

#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    async fn get_all(&self, limit: Option<u64>) -> RepoResult<Vec<purchase::Model>>;
    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<purchase::Model>>;
    async fn get_by_car_id(&self, cars_id: Uuid) -> RepoResult<Option<purchase::Model>>;
    async fn create(&self, cars_id: Uuid, date_of_purchase: NaiveDate) -> RepoResult<purchase::Model>;
}

/// A backend that provides every repository.
pub trait Repositories:
    BrandRepository
    + ModelRepository
    + ColorRepository
    + AccessoryRepository
    + InsuranceRepository
    + CustomerRepository
    + SalesPersonRepository
    + CarRepository
    + PurchaseRepository
    + 'static
{
}

impl<T> Repositories for T where
    T: BrandRepository
        + ModelRepository
        + ColorRepository
        + AccessoryRepository
        + InsuranceRepository
        + CustomerRepository
        + SalesPersonRepository
        + CarRepository
        + PurchaseRepository
        + 'static
{
}
