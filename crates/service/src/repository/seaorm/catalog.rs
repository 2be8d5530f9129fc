use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::{Set, Unchanged}, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use uuid::Uuid;

use models::{accessory, brand, car_model, color, insurance};

use super::SeaOrmRepository;
use crate::errors::ServiceError;
use crate::repository::{
    AccessoryRepository, BrandRepository, ColorRepository, InsuranceRepository, ModelRecord, ModelRepository, RepoResult,
};
use crate::resources::{AccessoryCreate, BrandCreate, ColorCreate, InsuranceCreate};

#[async_trait]
impl BrandRepository for SeaOrmRepository {
    async fn get_all(&self) -> RepoResult<Vec<brand::Model>> {
        Ok(brand::Entity::find().order_by_asc(brand::Column::Name).all(&self.db).await?)
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<brand::Model>> {
        Ok(brand::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn get_by_name(&self, name: &str) -> RepoResult<Option<brand::Model>> {
        Ok(brand::find_by_name(&self.db, name).await?)
    }

    async fn create(&self, input: &BrandCreate) -> RepoResult<brand::Model> {
        Ok(brand::create(&self.db, &input.name, &input.logo_url).await?)
    }

    async fn update(&self, b: brand::Model) -> RepoResult<brand::Model> {
        let am = brand::ActiveModel { id: Unchanged(b.id), name: Set(b.name), logo_url: Set(b.logo_url) };
        Ok(am.update(&self.db).await?)
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        brand::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

impl SeaOrmRepository {
    pub(super) async fn model_record(&self, model: car_model::Model) -> RepoResult<ModelRecord> {
        let brand = brand::Entity::find_by_id(model.brand_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::Internal(format!("model {} references a missing brand", model.id)))?;
        let colors = car_model::colors_of(&self.db, &model).await?;
        Ok(ModelRecord { model, brand, colors })
    }
}

#[async_trait]
impl ModelRepository for SeaOrmRepository {
    async fn get_all(&self, brand_id: Option<Uuid>) -> RepoResult<Vec<ModelRecord>> {
        let mut query = car_model::Entity::find().order_by_asc(car_model::Column::Name);
        if let Some(brand_id) = brand_id {
            query = query.filter(car_model::Column::BrandId.eq(brand_id));
        }
        let found = query.all(&self.db).await?;
        let mut records = Vec::with_capacity(found.len());
        for m in found {
            records.push(self.model_record(m).await?);
        }
        Ok(records)
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<ModelRecord>> {
        match car_model::Entity::find_by_id(id).one(&self.db).await? {
            Some(m) => Ok(Some(self.model_record(m).await?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ColorRepository for SeaOrmRepository {
    async fn get_all(&self) -> RepoResult<Vec<color::Model>> {
        Ok(color::Entity::find().order_by_asc(color::Column::Name).all(&self.db).await?)
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<color::Model>> {
        Ok(color::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn get_by_name(&self, name: &str) -> RepoResult<Option<color::Model>> {
        Ok(color::Entity::find().filter(color::Column::Name.eq(name)).one(&self.db).await?)
    }

    async fn create(&self, input: &ColorCreate) -> RepoResult<color::Model> {
        let rgb = (input.red_value, input.green_value, input.blue_value);
        Ok(color::create(&self.db, &input.name, input.price, rgb).await?)
    }
}

#[async_trait]
impl AccessoryRepository for SeaOrmRepository {
    async fn get_all(&self, limit: Option<u64>) -> RepoResult<Vec<accessory::Model>> {
        let mut query = accessory::Entity::find().order_by_asc(accessory::Column::Name);
        if let Some(n) = limit {
            query = query.limit(n);
        }
        Ok(query.all(&self.db).await?)
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<accessory::Model>> {
        Ok(accessory::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn get_by_name(&self, name: &str) -> RepoResult<Option<accessory::Model>> {
        Ok(accessory::Entity::find().filter(accessory::Column::Name.eq(name)).one(&self.db).await?)
    }

    async fn create(&self, input: &AccessoryCreate) -> RepoResult<accessory::Model> {
        Ok(accessory::create(&self.db, &input.name, input.price).await?)
    }

    async fn update(&self, a: accessory::Model) -> RepoResult<accessory::Model> {
        let am = accessory::ActiveModel { id: Unchanged(a.id), name: Set(a.name), price: Set(a.price) };
        Ok(am.update(&self.db).await?)
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        accessory::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

#[async_trait]
impl InsuranceRepository for SeaOrmRepository {
    async fn get_all(&self, limit: Option<u64>) -> RepoResult<Vec<insurance::Model>> {
        let mut query = insurance::Entity::find().order_by_asc(insurance::Column::Name);
        if let Some(n) = limit {
            query = query.limit(n);
        }
        Ok(query.all(&self.db).await?)
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<insurance::Model>> {
        Ok(insurance::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn get_by_name(&self, name: &str) -> RepoResult<Option<insurance::Model>> {
        Ok(insurance::Entity::find().filter(insurance::Column::Name.eq(name)).one(&self.db).await?)
    }

    async fn create(&self, input: &InsuranceCreate) -> RepoResult<insurance::Model> {
        Ok(insurance::create(&self.db, &input.name, input.price).await?)
    }

    async fn update(&self, i: insurance::Model) -> RepoResult<insurance::Model> {
        let am = insurance::ActiveModel { id: Unchanged(i.id), name: Set(i.name), price: Set(i.price) };
        Ok(am.update(&self.db).await?)
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        insurance::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
