//! `cars_has_accessories` join rows.
use sea_orm::entity::prelude::*;
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{car, accessory};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars_has_accessories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cars_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub accessories_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Car, Accessories }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Car => Entity::belongs_to(car::Entity)
                .from(Column::CarsId)
                .to(car::Column::Id)
                .into(),
            Relation::Accessories => Entity::belongs_to(accessory::Entity)
                .from(Column::AccessoriesId)
                .to(accessory::Column::Id)
                .into(),
        }
    }
}

impl Related<car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl Related<accessory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accessories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
