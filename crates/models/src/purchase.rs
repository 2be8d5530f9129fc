use sea_orm::{entity::prelude::*, Set, ConnectionTrait};
use uuid::Uuid;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{car, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchases")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub cars_id: Uuid,
    pub date_of_purchase: Date,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Car }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Car => Entity::belongs_to(car::Entity)
                .from(Column::CarsId)
                .to(car::Column::Id)
                .into(),
        }
    }
}

impl Related<car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A purchase is allowed up to and including the deadline day.
pub fn validate_purchase_date(deadline: NaiveDate, date_of_purchase: NaiveDate) -> Result<(), errors::ModelError> {
    if date_of_purchase > deadline {
        return Err(errors::ModelError::Range(format!(
            "purchase deadline {deadline} has passed (today is {date_of_purchase})"
        )));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, cars_id: Uuid, date_of_purchase: NaiveDate) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        cars_id: Set(cars_id),
        date_of_purchase: Set(date_of_purchase),
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_car<C: ConnectionTrait>(db: &C, cars_id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::CarsId.eq(cars_id))
        .one(db)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn purchase_on_deadline_day_is_allowed() {
        assert!(validate_purchase_date(d("2024-05-10"), d("2024-05-10")).is_ok());
        assert!(validate_purchase_date(d("2024-05-10"), d("2024-05-01")).is_ok());
    }

    #[test]
    fn purchase_after_deadline_is_a_range_error() {
        let err = validate_purchase_date(d("2024-05-10"), d("2024-05-11")).unwrap_err();
        assert!(matches!(err, errors::ModelError::Range(_)));
    }
}
