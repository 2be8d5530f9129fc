//! `models_has_colors`: the colors a model is offered in.
use sea_orm::entity::prelude::*;
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{car_model, color};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "models_has_colors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub models_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub colors_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Model, Color }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Model => Entity::belongs_to(car_model::Entity)
                .from(Column::ModelsId)
                .to(car_model::Column::Id)
                .into(),
            Relation::Color => Entity::belongs_to(color::Entity)
                .from(Column::ColorsId)
                .to(color::Column::Id)
                .into(),
        }
    }
}

impl Related<car_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Model.def()
    }
}

impl Related<color::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Color.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
