//! Customers and sales people.
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use models::{customer, sales_person};

use super::validation::{not_blank, valid_phone_number};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CustomerCreate {
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(custom(function = "valid_phone_number"))]
    pub phone_number: Option<String>,
    #[validate(custom(function = "not_blank"), length(max = 45))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"), length(max = 45))]
    pub last_name: String,
    #[validate(length(max = 255))]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CustomerUpdate {
    #[validate(email, length(max = 100))]
    pub email: Option<String>,
    #[validate(custom(function = "valid_phone_number"))]
    pub phone_number: Option<String>,
    #[validate(custom(function = "not_blank"), length(max = 45))]
    pub first_name: Option<String>,
    #[validate(custom(function = "not_blank"), length(max = 45))]
    pub last_name: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerResource {
    pub id: Uuid,
    pub email: String,
    pub phone_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
}

impl From<customer::Model> for CustomerResource {
    fn from(m: customer::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            phone_number: m.phone_number,
            first_name: m.first_name,
            last_name: m.last_name,
            address: m.address,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CustomerFilter {
    /// Case-insensitive substring of the customer email.
    pub email: Option<String>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SalesPersonCreate {
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "password must be 8 to 128 characters"))]
    pub password: String,
    #[validate(custom(function = "not_blank"), length(max = 45))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"), length(max = 45))]
    pub last_name: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SalesPersonLogin {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// Sales person as returned to clients; the password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SalesPersonResource {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<sales_person::Model> for SalesPersonResource {
    fn from(m: sales_person::Model) -> Self {
        Self { id: m.id, email: m.email, first_name: m.first_name, last_name: m.last_name }
    }
}

/// Login result. `token` is set only when a JWT secret is configured.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SalesPersonSession {
    pub sales_person: SalesPersonResource,
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> CustomerCreate {
        CustomerCreate {
            email: "kari@example.no".into(),
            phone_number: Some("+47 12345678".into()),
            first_name: "Kari".into(),
            last_name: "Nordmann".into(),
            address: None,
        }
    }

    #[test]
    fn valid_customer_passes() {
        assert!(customer().validate().is_ok());
    }

    #[test]
    fn customer_with_bad_email_or_phone_fails() {
        let mut c = customer();
        c.email = "not-an-email".into();
        assert!(c.validate().is_err());
        let mut c = customer();
        c.phone_number = Some("12".into());
        assert!(c.validate().is_err());
    }

    #[test]
    fn short_password_is_rejected() {
        let sp = SalesPersonCreate {
            email: "ola@example.no".into(),
            password: "short".into(),
            first_name: "Ola".into(),
            last_name: "Hansen".into(),
        };
        let msg = crate::errors::describe(&sp.validate().unwrap_err());
        assert!(msg.contains("password must be 8 to 128 characters"), "{msg}");
    }
}
