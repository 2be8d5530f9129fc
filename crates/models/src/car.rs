//! Cars and the purchase-deadline rules applied when one is created.
//!
//! A car references one model, color, customer and sales person, plus any number of
//! accessories and insurances through the `cars_has_*` join tables. Its deadline must fall
//! in `(today, today + DAYS_TO_DEADLINE]`.
use sea_orm::{entity::prelude::*, Set, ConnectionTrait, TransactionTrait};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{accessory, car_accessory, car_insurance, car_model, color, customer, errors, insurance, sales_person};

/// Days a customer has to purchase a car after it is registered.
pub const DAYS_TO_DEADLINE: u64 = 30;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub total_price: f64,
    pub purchase_deadline: Date,
    pub models_id: Uuid,
    pub colors_id: Uuid,
    pub customers_id: Uuid,
    pub sales_people_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Model, Color, Customer, SalesPerson, AccessoryLinks, InsuranceLinks }

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
            Relation::Customer => Entity::belongs_to(customer::Entity)
                .from(Column::CustomersId)
                .to(customer::Column::Id)
                .into(),
            Relation::SalesPerson => Entity::belongs_to(sales_person::Entity)
                .from(Column::SalesPeopleId)
                .to(sales_person::Column::Id)
                .into(),
            Relation::AccessoryLinks => Entity::has_many(car_accessory::Entity).into(),
            Relation::InsuranceLinks => Entity::has_many(car_insurance::Entity).into(),
        }
    }
}

impl Related<car_model::Entity> for Entity {
    fn to() -> RelationDef { Relation::Model.def() }
}

impl Related<color::Entity> for Entity {
    fn to() -> RelationDef { Relation::Color.def() }
}

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

impl Related<sales_person::Entity> for Entity {
    fn to() -> RelationDef { Relation::SalesPerson.def() }
}

impl Related<car_accessory::Entity> for Entity {
    fn to() -> RelationDef { Relation::AccessoryLinks.def() }
}

impl Related<car_insurance::Entity> for Entity {
    fn to() -> RelationDef { Relation::InsuranceLinks.def() }
}

impl Related<accessory::Entity> for Entity {
    fn to() -> RelationDef {
        car_accessory::Relation::Accessories.def()
    }

    fn via() -> Option<RelationDef> {
        Some(car_accessory::Relation::Car.def().rev())
    }
}

impl Related<insurance::Entity> for Entity {
    fn to() -> RelationDef {
        car_insurance::Relation::Insurances.def()
    }

    fn via() -> Option<RelationDef> {
        Some(car_insurance::Relation::Car.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Parse a requested deadline. `""` means "use the default"; a date-time is accepted
/// only when its time component is midnight.
pub fn parse_purchase_deadline(raw: &str) -> Result<Option<NaiveDate>, errors::ModelError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if !has_padded_date(raw) {
        return Err(errors::ModelError::Validation("Input should be a valid date".into()));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    let datetime = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|_| errors::ModelError::Validation("Input should be a valid date".into()))?;
    if datetime.time() != NaiveTime::MIN {
        return Err(errors::ModelError::Validation("Datetimes provided to dates should have zero time".into()));
    }
    Ok(Some(datetime.date()))
}

/// `YYYY-MM-DD`, optionally followed by a `T` or space time part. chrono alone accepts `2024-3-5`.
fn has_padded_date(raw: &str) -> bool {
    let b = raw.as_bytes();
    if b.len() < 10 || (b.len() > 10 && b[10] != b'T' && b[10] != b' ') {
        return false;
    }
    b[..10]
        .iter()
        .enumerate()
        .all(|(i, c)| if i == 4 || i == 7 { *c == b'-' } else { c.is_ascii_digit() })
}

/// Resolve the deadline for a car registered on `today`.
pub fn resolve_purchase_deadline(requested: Option<NaiveDate>, today: NaiveDate) -> Result<NaiveDate, errors::ModelError> {
    let latest = today
        .checked_add_days(Days::new(DAYS_TO_DEADLINE))
        .ok_or_else(|| errors::ModelError::Range("date out of range".into()))?;
    let Some(deadline) = requested else {
        return Ok(latest);
    };
    if deadline <= today {
        return Err(errors::ModelError::Range("purchase_deadline must be after the current date".into()));
    }
    if deadline > latest {
        return Err(errors::ModelError::Range(format!(
            "purchase_deadline must be within {DAYS_TO_DEADLINE} days from the current date"
        )));
    }
    Ok(deadline)
}

pub fn total_price<A, I>(model_price: f64, color_price: f64, accessory_prices: A, insurance_prices: I) -> f64
where
    A: IntoIterator<Item = f64>,
    I: IntoIterator<Item = f64>,
{
    model_price + color_price + accessory_prices.into_iter().sum::<f64>() + insurance_prices.into_iter().sum::<f64>()
}

#[derive(Clone, Debug)]
pub struct NewCar {
    pub models_id: Uuid,
    pub colors_id: Uuid,
    pub customers_id: Uuid,
    pub sales_people_id: Uuid,
    pub accessory_ids: Vec<Uuid>,
    pub insurance_ids: Vec<Uuid>,
    pub purchase_deadline: NaiveDate,
    pub total_price: f64,
}

/// Insert the car row and its association rows in a single transaction.
pub async fn create<C: ConnectionTrait + TransactionTrait>(db: &C, new: &NewCar) -> Result<Model, errors::ModelError> {
    let txn = db.begin().await?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        total_price: Set(new.total_price),
        purchase_deadline: Set(new.purchase_deadline),
        models_id: Set(new.models_id),
        colors_id: Set(new.colors_id),
        customers_id: Set(new.customers_id),
        sales_people_id: Set(new.sales_people_id),
    };
    let created = am.insert(&txn).await?;

    if !new.accessory_ids.is_empty() {
        let rows = new.accessory_ids.iter().map(|id| car_accessory::ActiveModel {
            cars_id: Set(created.id),
            accessories_id: Set(*id),
        });
        car_accessory::Entity::insert_many(rows)
            .exec(&txn)
            .await?;
    }
    if !new.insurance_ids.is_empty() {
        let rows = new.insurance_ids.iter().map(|id| car_insurance::ActiveModel {
            cars_id: Set(created.id),
            insurances_id: Set(*id),
        });
        car_insurance::Entity::insert_many(rows)
            .exec(&txn)
            .await?;
    }
    // Dropping an uncommitted transaction rolls it back
    txn.commit().await?;
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn missing_deadline_defaults_to_window_end() {
        let resolved = resolve_purchase_deadline(None, today()).unwrap();
        assert_eq!(resolved, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    }

    #[test]
    fn deadline_today_is_rejected() {
        let err = resolve_purchase_deadline(Some(today()), today()).unwrap_err();
        assert!(matches!(&err, errors::ModelError::Range(m) if m.contains("must be after the current date")));
    }

    #[test]
    fn deadline_on_last_day_of_window_is_accepted() {
        let last = today() + Days::new(DAYS_TO_DEADLINE);
        assert_eq!(resolve_purchase_deadline(Some(last), today()).unwrap(), last);
    }

    #[test]
    fn deadline_past_window_is_rejected() {
        let past = today() + Days::new(DAYS_TO_DEADLINE + 1);
        let err = resolve_purchase_deadline(Some(past), today()).unwrap_err();
        assert_eq!(err.to_string(), "purchase_deadline must be within 30 days from the current date");
    }

    #[test]
    fn parse_accepts_plain_dates_and_blank() {
        assert_eq!(parse_purchase_deadline("").unwrap(), None);
        assert_eq!(parse_purchase_deadline("2024-03-15").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn parse_accepts_midnight_datetimes() {
        assert_eq!(parse_purchase_deadline("2024-03-15T00:00:00").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(parse_purchase_deadline("2024-03-15T00:00:00Z").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn parse_rejects_datetimes_with_time() {
        let err = parse_purchase_deadline("2024-03-15 13:45:10.123456").unwrap_err();
        assert_eq!(err.to_string(), "Datetimes provided to dates should have zero time");
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_purchase_deadline("next tuesday").unwrap_err();
        assert_eq!(err.to_string(), "Input should be a valid date");
    }

    #[test]
    fn parse_requires_zero_padded_dates() {
        for raw in ["2024-3-5", "2024-03-5", "2024-3-05T00:00:00", "24-03-05", "2024-03-05x"] {
            let err = parse_purchase_deadline(raw).unwrap_err();
            assert_eq!(err.to_string(), "Input should be a valid date", "{raw}");
        }
    }

    #[test]
    fn total_price_sums_every_component() {
        let total = total_price(200_000.0, 5_000.0, [1_000.0, 250.0], [3_000.0]);
        assert_eq!(total, 209_250.0);
        assert_eq!(total_price(10.0, 0.0, Vec::new(), Vec::new()), 10.0);
    }
}
