use sea_orm::{entity::prelude::*, Set, ConnectionTrait};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{car, car_insurance, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "insurances")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { CarLinks }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::CarLinks => Entity::has_many(car_insurance::Entity).into(),
        }
    }
}

impl Related<car_insurance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CarLinks.def()
    }
}

impl Related<car::Entity> for Entity {
    fn to() -> RelationDef {
        car_insurance::Relation::Car.def()
    }

    fn via() -> Option<RelationDef> {
        Some(car_insurance::Relation::Insurances.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, price: f64) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        price: Set(price),
    };
    Ok(am.insert(db).await?)
}
