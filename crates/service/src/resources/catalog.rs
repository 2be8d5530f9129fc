//! Brands, models, colors, accessories and insurances.
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use models::{accessory, brand, car_model, color, insurance};

use super::validation::{non_negative, not_blank};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BrandCreate {
    #[validate(custom(function = "not_blank"), length(max = 60))]
    pub name: String,
    #[validate(custom(function = "not_blank"), length(max = 255))]
    pub logo_url: String,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct BrandUpdate {
    #[validate(custom(function = "not_blank"), length(max = 60))]
    pub name: Option<String>,
    #[validate(custom(function = "not_blank"), length(max = 255))]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BrandResource {
    pub id: Uuid,
    pub name: String,
    pub logo_url: String,
}

impl From<brand::Model> for BrandResource {
    fn from(m: brand::Model) -> Self {
        Self { id: m.id, name: m.name, logo_url: m.logo_url }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ColorCreate {
    #[validate(custom(function = "not_blank"), length(max = 45))]
    pub name: String,
    #[validate(custom(function = "non_negative"))]
    pub price: f64,
    #[validate(range(min = 0, max = 255))]
    pub red_value: i32,
    #[validate(range(min = 0, max = 255))]
    pub green_value: i32,
    #[validate(range(min = 0, max = 255))]
    pub blue_value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ColorResource {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub red_value: i32,
    pub green_value: i32,
    pub blue_value: i32,
}

impl From<color::Model> for ColorResource {
    fn from(m: color::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            price: m.price,
            red_value: m.red_value,
            green_value: m.green_value,
            blue_value: m.blue_value,
        }
    }
}

/// A model with its brand and the colors it is offered in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModelResource {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub brand: BrandResource,
    pub colors: Vec<ColorResource>,
}

impl ModelResource {
    pub fn new(model: car_model::Model, brand: brand::Model, colors: Vec<color::Model>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            brand: brand.into(),
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ModelFilter {
    /// Only models of this brand.
    pub brand_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AccessoryCreate {
    #[validate(custom(function = "not_blank"), length(max = 60))]
    pub name: String,
    #[validate(custom(function = "non_negative"))]
    pub price: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct AccessoryUpdate {
    #[validate(custom(function = "not_blank"), length(max = 60))]
    pub name: Option<String>,
    #[validate(custom(function = "non_negative"))]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccessoryResource {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

impl From<accessory::Model> for AccessoryResource {
    fn from(m: accessory::Model) -> Self {
        Self { id: m.id, name: m.name, price: m.price }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct InsuranceCreate {
    #[validate(custom(function = "not_blank"), length(max = 45))]
    pub name: String,
    #[validate(custom(function = "non_negative"))]
    pub price: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct InsuranceUpdate {
    #[validate(custom(function = "not_blank"), length(max = 45))]
    pub name: Option<String>,
    #[validate(custom(function = "non_negative"))]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InsuranceResource {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

impl From<insurance::Model> for InsuranceResource {
    fn from(m: insurance::Model) -> Self {
        Self { id: m.id, name: m.name, price: m.price }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    /// Maximum number of rows returned.
    pub limit: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_create_rejects_blank_and_long_names() {
        let blank = BrandCreate { name: "  ".into(), logo_url: "https://x/logo.png".into() };
        assert!(blank.validate().is_err());
        let long = BrandCreate { name: "x".repeat(61), logo_url: "https://x/logo.png".into() };
        assert!(long.validate().is_err());
        let ok = BrandCreate { name: "Volvo".into(), logo_url: "https://x/logo.png".into() };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn color_channels_are_bounded() {
        let c = ColorCreate { name: "Red".into(), price: 0.0, red_value: 256, green_value: 0, blue_value: 0 };
        let errs = c.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("red_value"));
    }

    #[test]
    fn update_rules_apply_only_to_present_fields() {
        assert!(AccessoryUpdate::default().validate().is_ok());
        let neg = AccessoryUpdate { name: None, price: Some(-1.0) };
        assert!(neg.validate().is_err());
        let blank = InsuranceUpdate { name: Some(String::new()), price: None };
        assert!(blank.validate().is_err());
    }
}
