use sea_orm::{entity::prelude::*, Set, ConnectionTrait};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{car_model, errors, model_color};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "colors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub price: f64,
    pub red_value: i32,
    pub green_value: i32,
    pub blue_value: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { ModelColors }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ModelColors => Entity::has_many(model_color::Entity).into(),
        }
    }
}

impl Related<model_color::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModelColors.def()
    }
}

impl Related<car_model::Entity> for Entity {
    fn to() -> RelationDef {
        model_color::Relation::Model.def()
    }

    fn via() -> Option<RelationDef> {
        Some(model_color::Relation::Color.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    name: &str,
    price: f64,
    rgb: (i32, i32, i32),
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        price: Set(price),
        red_value: Set(rgb.0),
        green_value: Set(rgb.1),
        blue_value: Set(rgb.2),
    };
    Ok(am.insert(db).await?)
}
