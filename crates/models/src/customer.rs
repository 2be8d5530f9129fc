use sea_orm::{entity::prelude::*, Set, ConnectionTrait};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{car, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub phone_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Cars }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Cars => Entity::has_many(car::Entity).into(),
        }
    }
}

impl Related<car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cars.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub struct NewCustomer<'a> {
    pub email: &'a str,
    pub phone_number: Option<&'a str>,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub address: Option<&'a str>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewCustomer<'_>) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(input.email.to_string()),
        phone_number: Set(input.phone_number.map(str::to_string)),
        first_name: Set(input.first_name.to_string()),
        last_name: Set(input.last_name.to_string()),
        address: Set(input.address.map(str::to_string)),
    };
    Ok(am.insert(db).await?)
}

/// Whether `email` belongs to a customer other than `exclude`.
pub async fn is_email_taken<C: ConnectionTrait>(
    db: &C,
    email: &str,
    exclude: Option<Uuid>,
) -> Result<bool, errors::ModelError> {
    let mut query = Entity::find().filter(Column::Email.eq(email));
    if let Some(id) = exclude {
        query = query.filter(Column::Id.ne(id));
    }
    let found = query.one(db).await?;
    Ok(found.is_some())
}
