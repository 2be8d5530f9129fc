//! Brands, models, colors, accessories and insurances.
use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::errors::ServiceError;
use crate::repository::{AccessoryRepository, BrandRepository, ColorRepository, InsuranceRepository, ModelRecord, ModelRepository};
use crate::resources::{
    AccessoryCreate, AccessoryResource, AccessoryUpdate, BrandCreate, BrandResource, BrandUpdate, ColorCreate, ColorResource,
    InsuranceCreate, InsuranceResource, InsuranceUpdate, ModelResource,
};

impl From<ModelRecord> for ModelResource {
    fn from(r: ModelRecord) -> Self {
        ModelResource::new(r.model, r.brand, r.colors)
    }
}

#[derive(Clone)]
pub struct BrandService {
    repo: Arc<dyn BrandRepository>,
}

impl BrandService {
    pub fn new(repo: Arc<dyn BrandRepository>) -> Self { Self { repo } }

    pub async fn get_all(&self) -> Result<Vec<BrandResource>, ServiceError> {
        Ok(self.repo.get_all().await?.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<BrandResource, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ServiceError::not_found("Brand", id))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: BrandCreate) -> Result<BrandResource, ServiceError> {
        input.validate()?;
        if self.repo.get_by_name(&input.name).await?.is_some() {
            return Err(ServiceError::already_taken("Brand", "name", input.name));
        }
        let created = self.repo.create(&input).await?;
        info!(brand_id = %created.id, "brand_created");
        Ok(created.into())
    }

    #[instrument(skip(self, input), fields(brand_id = %id))]
    pub async fn update(&self, id: Uuid, input: BrandUpdate) -> Result<BrandResource, ServiceError> {
        input.validate()?;
        let mut current = self.repo.get_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Brand", id))?;
        if input.name.is_none() && input.logo_url.is_none() {
            return Ok(current.into());
        }
        if let Some(name) = input.name {
            if let Some(other) = self.repo.get_by_name(&name).await? {
                if other.id != id {
                    return Err(ServiceError::already_taken("Brand", "name", name));
                }
            }
            current.name = name;
        }
        if let Some(logo_url) = input.logo_url {
            current.logo_url = logo_url;
        }
        let updated = self.repo.update(current).await?;
        info!(brand_id = %updated.id, "brand_updated");
        Ok(updated.into())
    }

    /// Delete a brand and return it as it was.
    #[instrument(skip(self), fields(brand_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<BrandResource, ServiceError> {
        let existing = self.repo.get_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Brand", id))?;
        self.repo.delete(id).await?;
        info!("brand_deleted");
        Ok(existing.into())
    }
}

#[derive(Clone)]
pub struct ModelService {
    repo: Arc<dyn ModelRepository>,
    brands: Arc<dyn BrandRepository>,
}

impl ModelService {
    pub fn new(repo: Arc<dyn ModelRepository>, brands: Arc<dyn BrandRepository>) -> Self { Self { repo, brands } }

    /// List models, optionally only those of one brand. The brand must exist.
    pub async fn get_all(&self, brand_id: Option<Uuid>) -> Result<Vec<ModelResource>, ServiceError> {
        if let Some(id) = brand_id {
            if self.brands.get_by_id(id).await?.is_none() {
                return Err(ServiceError::not_found("Brand", id));
            }
        }
        Ok(self.repo.get_all(brand_id).await?.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ModelResource, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ServiceError::not_found("Model", id))
    }
}

#[derive(Clone)]
pub struct ColorService {
    repo: Arc<dyn ColorRepository>,
}

impl ColorService {
    pub fn new(repo: Arc<dyn ColorRepository>) -> Self { Self { repo } }

    pub async fn get_all(&self) -> Result<Vec<ColorResource>, ServiceError> {
        Ok(self.repo.get_all().await?.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ColorResource, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ServiceError::not_found("Color", id))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: ColorCreate) -> Result<ColorResource, ServiceError> {
        input.validate()?;
        if self.repo.get_by_name(&input.name).await?.is_some() {
            return Err(ServiceError::already_taken("Color", "name", input.name));
        }
        let created = self.repo.create(&input).await?;
        info!(color_id = %created.id, "color_created");
        Ok(created.into())
    }
}

#[derive(Clone)]
pub struct AccessoryService {
    repo: Arc<dyn AccessoryRepository>,
}

impl AccessoryService {
    pub fn new(repo: Arc<dyn AccessoryRepository>) -> Self { Self { repo } }

    pub async fn get_all(&self, limit: Option<u64>) -> Result<Vec<AccessoryResource>, ServiceError> {
        Ok(self.repo.get_all(limit).await?.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<AccessoryResource, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ServiceError::not_found("Accessory", id))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: AccessoryCreate) -> Result<AccessoryResource, ServiceError> {
        input.validate()?;
        if self.repo.get_by_name(&input.name).await?.is_some() {
            return Err(ServiceError::already_taken("Accessory", "name", input.name));
        }
        let created = self.repo.create(&input).await?;
        info!(accessory_id = %created.id, "accessory_created");
        Ok(created.into())
    }

    #[instrument(skip(self, input), fields(accessory_id = %id))]
    pub async fn update(&self, id: Uuid, input: AccessoryUpdate) -> Result<AccessoryResource, ServiceError> {
        input.validate()?;
        let mut current = self.repo.get_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Accessory", id))?;
        if input.name.is_none() && input.price.is_none() {
            return Ok(current.into());
        }
        if let Some(name) = input.name {
            if self.repo.get_by_name(&name).await?.is_some_and(|other| other.id != id) {
                return Err(ServiceError::already_taken("Accessory", "name", name));
            }
            current.name = name;
        }
        if let Some(price) = input.price {
            current.price = price;
        }
        let updated = self.repo.update(current).await?;
        info!("accessory_updated");
        Ok(updated.into())
    }

    #[instrument(skip(self), fields(accessory_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<AccessoryResource, ServiceError> {
        let existing = self.repo.get_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Accessory", id))?;
        self.repo.delete(id).await?;
        info!("accessory_deleted");
        Ok(existing.into())
    }
}

#[derive(Clone)]
pub struct InsuranceService {
    repo: Arc<dyn InsuranceRepository>,
}

impl InsuranceService {
    pub fn new(repo: Arc<dyn InsuranceRepository>) -> Self { Self { repo } }

    pub async fn get_all(&self, limit: Option<u64>) -> Result<Vec<InsuranceResource>, ServiceError> {
        Ok(self.repo.get_all(limit).await?.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<InsuranceResource, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ServiceError::not_found("Insurance", id))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: InsuranceCreate) -> Result<InsuranceResource, ServiceError> {
        input.validate()?;
        if self.repo.get_by_name(&input.name).await?.is_some() {
            return Err(ServiceError::already_taken("Insurance", "name", input.name));
        }
        let created = self.repo.create(&input).await?;
        info!(insurance_id = %created.id, "insurance_created");
        Ok(created.into())
    }

    #[instrument(skip(self, input), fields(insurance_id = %id))]
    pub async fn update(&self, id: Uuid, input: InsuranceUpdate) -> Result<InsuranceResource, ServiceError> {
        input.validate()?;
        let mut current = self.repo.get_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Insurance", id))?;
        if input.name.is_none() && input.price.is_none() {
            return Ok(current.into());
        }
        if let Some(name) = input.name {
            if self.repo.get_by_name(&name).await?.is_some_and(|other| other.id != id) {
                return Err(ServiceError::already_taken("Insurance", "name", name));
            }
            current.name = name;
        }
        if let Some(price) = input.price {
            current.price = price;
        }
        let updated = self.repo.update(current).await?;
        info!("insurance_updated");
        Ok(updated.into())
    }

    #[instrument(skip(self), fields(insurance_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<InsuranceResource, ServiceError> {
        let existing = self.repo.get_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Insurance", id))?;
        self.repo.delete(id).await?;
        info!("insurance_deleted");
        Ok(existing.into())
    }
}
