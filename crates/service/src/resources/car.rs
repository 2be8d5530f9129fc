//! Car registration input, list filters and the expanded car view.
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use models::{car, purchase};

use super::catalog::{AccessoryResource, ColorResource, InsuranceResource, ModelResource};
use super::people::{CustomerResource, SalesPersonResource};
use super::validation::unique_ids;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CarCreate {
    pub models_id: Uuid,
    pub colors_id: Uuid,
    pub customers_id: Uuid,
    pub sales_people_id: Uuid,
    #[serde(default)]
    #[validate(custom(function = "unique_ids", message = "accessories must be unique."))]
    pub accessory_ids: Vec<Uuid>,
    #[serde(default)]
    #[validate(custom(function = "unique_ids", message = "insurances must be unique."))]
    pub insurance_ids: Vec<Uuid>,
    /// `YYYY-MM-DD`; missing, `null` or `""` means today + 30 days.
    #[serde(default, deserialize_with = "deserialize_purchase_deadline")]
    #[schema(value_type = Option<String>, format = Date)]
    pub purchase_deadline: Option<NaiveDate>,
}

fn deserialize_purchase_deadline<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(serde_json::Value),
    }
    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Text(s)) => car::parse_purchase_deadline(&s).map_err(serde::de::Error::custom),
        Some(Raw::Other(_)) => Err(serde::de::Error::custom("Input should be a valid date")),
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CarFilter {
    pub customer_id: Option<Uuid>,
    pub sales_person_id: Option<Uuid>,
    /// `true`: only purchased cars, `false`: only unpurchased cars.
    pub is_purchased: Option<bool>,
    /// `true`: only cars whose deadline lies before today.
    pub is_past_purchase_deadline: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarResource {
    pub id: Uuid,
    pub total_price: f64,
    pub purchase_deadline: NaiveDate,
    pub model: ModelResource,
    pub color: ColorResource,
    pub customer: CustomerResource,
    pub sales_person: SalesPersonResource,
    pub accessories: Vec<AccessoryResource>,
    pub insurances: Vec<InsuranceResource>,
    pub is_purchased: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PurchaseCreate {
    pub cars_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PurchaseResource {
    pub id: Uuid,
    pub cars_id: Uuid,
    pub date_of_purchase: NaiveDate,
}

impl From<purchase::Model> for PurchaseResource {
    fn from(m: purchase::Model) -> Self {
        Self { id: m.id, cars_id: m.cars_id, date_of_purchase: m.date_of_purchase }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(deadline: serde_json::Value) -> serde_json::Value {
        json!({
            "models_id": Uuid::new_v4(),
            "colors_id": Uuid::new_v4(),
            "customers_id": Uuid::new_v4(),
            "sales_people_id": Uuid::new_v4(),
            "purchase_deadline": deadline,
        })
    }

    #[test]
    fn missing_null_and_empty_deadlines_mean_default() {
        let mut missing = body(json!(null));
        missing.as_object_mut().unwrap().remove("purchase_deadline");
        for v in [missing, body(json!(null)), body(json!(""))] {
            let c: CarCreate = serde_json::from_value(v).unwrap();
            assert_eq!(c.purchase_deadline, None);
            assert!(c.accessory_ids.is_empty());
        }
    }

    #[test]
    fn deadline_strings_are_parsed() {
        let c: CarCreate = serde_json::from_value(body(json!("2024-06-01"))).unwrap();
        assert_eq!(c.purchase_deadline, NaiveDate::from_ymd_opt(2024, 6, 1));
    }

    #[test]
    fn bad_deadlines_report_why() {
        let err = serde_json::from_value::<CarCreate>(body(json!("2024-06-01T10:30:00"))).unwrap_err();
        assert!(err.to_string().contains("Datetimes provided to dates should have zero time"));
        let err = serde_json::from_value::<CarCreate>(body(json!("soon"))).unwrap_err();
        assert!(err.to_string().contains("Input should be a valid date"));
        let err = serde_json::from_value::<CarCreate>(body(json!(20240601))).unwrap_err();
        assert!(err.to_string().contains("Input should be a valid date"));
    }

    #[test]
    fn duplicate_accessories_and_insurances_fail_validation() {
        let id = Uuid::new_v4();
        let mut v = body(json!(null));
        v["accessory_ids"] = json!([id, id]);
        v["insurance_ids"] = json!([id, id]);
        let c: CarCreate = serde_json::from_value(v).unwrap();
        let msg = crate::errors::describe(&c.validate().unwrap_err());
        assert!(msg.contains("accessories must be unique."), "{msg}");
        assert!(msg.contains("insurances must be unique."), "{msg}");
    }
}
