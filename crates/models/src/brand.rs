use sea_orm::{entity::prelude::*, Set, ConnectionTrait};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{car_model, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "brands")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub logo_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Models }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Models => Entity::has_many(car_model::Entity).into(),
        }
    }
}

impl Related<car_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Models.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, logo_url: &str) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        logo_url: Set(logo_url.to_string()),
    };
    Ok(am.insert(db).await?)
}

/// Case-sensitive lookup used for uniqueness checks.
pub async fn find_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::Name.eq(name))
        .one(db)
        .await?)
}
