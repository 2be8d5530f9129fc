//! Car models (`models` table). A model belongs to a brand and is offered in a set of colors.
//!
//! Models have no HTTP create endpoint; they are seeded through [`create`].
use sea_orm::{entity::prelude::*, Set, ConnectionTrait, QueryOrder, TransactionTrait};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{brand, color, errors, model_color};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "models")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub price: f64,
    pub brand_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Brand, ModelColors }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Brand => Entity::belongs_to(brand::Entity)
                .from(Column::BrandId)
                .to(brand::Column::Id)
                .into(),
            Relation::ModelColors => Entity::has_many(model_color::Entity).into(),
        }
    }
}

impl Related<brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<model_color::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModelColors.def()
    }
}

impl Related<color::Entity> for Entity {
    fn to() -> RelationDef {
        model_color::Relation::Color.def()
    }

    fn via() -> Option<RelationDef> {
        Some(model_color::Relation::Model.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a model together with its offered colors in one transaction.
pub async fn create<C: ConnectionTrait + TransactionTrait>(
    db: &C,
    name: &str,
    price: f64,
    brand_id: Uuid,
    color_ids: &[Uuid],
) -> Result<Model, errors::ModelError> {
    let txn = db.begin().await?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        price: Set(price),
        brand_id: Set(brand_id),
    };
    let created = am.insert(&txn).await?;
    if !color_ids.is_empty() {
        let links = color_ids.iter().map(|color_id| model_color::ActiveModel {
            models_id: Set(created.id),
            colors_id: Set(*color_id),
        });
        model_color::Entity::insert_many(links)
            .exec(&txn)
            .await?;
    }
    txn.commit().await?;
    Ok(created)
}

/// Offered colors of a model, ordered by name.
pub async fn colors_of<C: ConnectionTrait>(db: &C, model: &Model) -> Result<Vec<color::Model>, errors::ModelError> {
    Ok(model
        .find_related(color::Entity)
        .order_by_asc(color::Column::Name)
        .all(db)
        .await?)
}
