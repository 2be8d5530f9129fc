//! `cars_has_insurances` join rows.
use sea_orm::entity::prelude::*;
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{car, insurance};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars_has_insurances")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cars_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub insurances_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Car, Insurances }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Car => Entity::belongs_to(car::Entity)
                .from(Column::CarsId)
                .to(car::Column::Id)
                .into(),
            Relation::Insurances => Entity::belongs_to(insurance::Entity)
                .from(Column::InsurancesId)
                .to(insurance::Column::Id)
                .into(),
        }
    }
}

impl Related<car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl Related<insurance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Insurances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
