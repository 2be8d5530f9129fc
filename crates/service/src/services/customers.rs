use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::errors::ServiceError;
use crate::repository::CustomerRepository;
use crate::resources::{CustomerCreate, CustomerFilter, CustomerResource, CustomerUpdate};

#[derive(Clone)]
pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self { Self { repo } }

    pub async fn get_all(&self, filter: &CustomerFilter) -> Result<Vec<CustomerResource>, ServiceError> {
        let email = filter.email.as_deref().filter(|e| !e.trim().is_empty());
        Ok(self.repo.get_all(email, filter.limit).await?.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CustomerResource, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ServiceError::not_found("Customer", id))
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: CustomerCreate) -> Result<CustomerResource, ServiceError> {
        input.validate()?;
        if self.repo.is_email_taken(&input.email, None).await? {
            return Err(ServiceError::already_taken("Customer", "email", input.email));
        }
        let created = self.repo.create(&input).await?;
        info!(customer_id = %created.id, "customer_created");
        Ok(created.into())
    }

    /// Partial update. A new email must not belong to another customer.
    #[instrument(skip(self, input), fields(customer_id = %id))]
    pub async fn update(&self, id: Uuid, input: CustomerUpdate) -> Result<CustomerResource, ServiceError> {
        input.validate()?;
        let mut current = self.repo.get_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Customer", id))?;
        let CustomerUpdate { email, phone_number, first_name, last_name, address } = input;
        if email.is_none() && phone_number.is_none() && first_name.is_none() && last_name.is_none() && address.is_none() {
            return Ok(current.into());
        }
        if let Some(email) = email {
            if self.repo.is_email_taken(&email, Some(id)).await? {
                return Err(ServiceError::already_taken("Customer", "email", email));
            }
            current.email = email;
        }
        if phone_number.is_some() {
            current.phone_number = phone_number;
        }
        if let Some(first_name) = first_name {
            current.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            current.last_name = last_name;
        }
        if address.is_some() {
            current.address = address;
        }
        let updated = self.repo.update(current).await?;
        info!("customer_updated");
        Ok(updated.into())
    }

    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<CustomerResource, ServiceError> {
        let existing = self.repo.get_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Customer", id))?;
        self.repo.delete(id).await?;
        info!("customer_deleted");
        Ok(existing.into())
    }
}
