use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} with ID: {id} does not exist.")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("The model: {model} with colors: [{}] does not have the color: {color} to be given to a car.", offered.join(", "))]
    ColorNotOfferedByModel { model: String, color: String, offered: Vec<String> },
    #[error("{entity} with {field}: {value} is already taken.")]
    AlreadyTaken { entity: &'static str, field: &'static str, value: String },
    #[error("The purchase deadline {deadline} of car with ID: {car_id} has passed.")]
    PurchaseDeadlinePassed { car_id: Uuid, deadline: NaiveDate },
    #[error("{0}")]
    Validation(String),
    #[error("invalid credentials")]
    Unauthorized,
    #[error("database error: {0}")]
    Db(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn already_taken(entity: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        Self::AlreadyTaken { entity, field, value: value.into() }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::Db(e.to_string())
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errs: ValidationErrors) -> Self {
        ServiceError::Validation(describe(&errs))
    }
}

/// Flatten field errors into `field: message; field: message`, sorted by field.
pub fn describe(errs: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errs
        .field_errors()
        .into_iter()
        .flat_map(|(field, list)| {
            list.iter().map(move |e| {
                let msg = e.message.as_ref().map(|m| m.to_string()).unwrap_or_else(|| e.code.to_string());
                format!("{field}: {msg}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let id = Uuid::nil();
        let e = ServiceError::not_found("Model", id);
        assert_eq!(e.to_string(), format!("Model with ID: {id} does not exist."));
    }

    #[test]
    fn color_error_lists_offered_colors() {
        let e = ServiceError::ColorNotOfferedByModel {
            model: "Model S".into(),
            color: "Green".into(),
            offered: vec!["Black".into(), "White".into()],
        };
        assert_eq!(
            e.to_string(),
            "The model: Model S with colors: [Black, White] does not have the color: Green to be given to a car."
        );
    }

    #[test]
    fn already_taken_message() {
        let e = ServiceError::already_taken("Customer", "email", "a@b.no");
        assert_eq!(e.to_string(), "Customer with email: a@b.no is already taken.");
    }
}
