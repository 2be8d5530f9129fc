//! Sales people and their login.
use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use chrono::{DateTime, Duration, Utc};
use configs::AuthConfig;
use jsonwebtoken::{encode, EncodingKey, Header as JwtHeader};
use rand::rngs::OsRng;
use serde::Serialize;
use tracing::{debug, info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::errors::ServiceError;
use crate::repository::SalesPersonRepository;
use crate::resources::{SalesPersonCreate, SalesPersonLogin, SalesPersonResource, SalesPersonSession};

#[derive(Serialize)]
struct Claims {
    sub: String,
    uid: String,
    exp: usize,
}

/// Unix `exp` claim for a token issued at `now`.
fn token_expiry(now: DateTime<Utc>, ttl_hours: i64) -> Result<usize, ServiceError> {
    Duration::try_hours(ttl_hours)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .and_then(|exp| usize::try_from(exp.timestamp()).ok())
        .ok_or_else(|| ServiceError::Internal(format!("token ttl of {ttl_hours} hours is out of range")))
}

#[derive(Clone)]
pub struct SalesPersonService {
    repo: Arc<dyn SalesPersonRepository>,
    cfg: AuthConfig,
}

impl SalesPersonService {
    pub fn new(repo: Arc<dyn SalesPersonRepository>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    pub async fn get_all(&self) -> Result<Vec<SalesPersonResource>, ServiceError> {
        Ok(self.repo.get_all().await?.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<SalesPersonResource, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ServiceError::not_found("Sales person", id))
    }

    /// Register a sales person with an argon2-hashed password.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::repository::InMemoryRepository;
    /// use service::resources::SalesPersonCreate;
    /// use service::services::SalesPersonService;
    /// let svc = SalesPersonService::new(Arc::new(InMemoryRepository::new()), configs::AuthConfig::default());
    /// let input = SalesPersonCreate { email: "ola@example.no".into(), password: "Secret123".into(), first_name: "Ola".into(), last_name: "Hansen".into() };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.email, "ola@example.no");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: SalesPersonCreate) -> Result<SalesPersonResource, ServiceError> {
        input.validate()?;
        if let Some(existing) = self.repo.get_by_email(&input.email).await? {
            debug!("sales person exists: {}", existing.email);
            return Err(ServiceError::already_taken("Sales person", "email", input.email));
        }
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| ServiceError::Internal(format!("hashing error: {e}")))?
            .to_string();
        let created = self.repo.create(&input.email, hash, &input.first_name, &input.last_name).await?;
        info!(sales_person_id = %created.id, email = %created.email, "sales_person_registered");
        Ok(created.into())
    }

    /// Check a sales person's password and issue a token when a secret is configured.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::repository::InMemoryRepository;
    /// use service::resources::{SalesPersonCreate, SalesPersonLogin};
    /// use service::services::SalesPersonService;
    /// let cfg = configs::AuthConfig { jwt_secret: Some("secret".into()), token_ttl_hours: 1 };
    /// let svc = SalesPersonService::new(Arc::new(InMemoryRepository::new()), cfg);
    /// let _ = tokio_test::block_on(svc.create(SalesPersonCreate { email: "u@e.no".into(), password: "Passw0rd".into(), first_name: "U".into(), last_name: "E".into() }));
    /// let session = tokio_test::block_on(svc.login(SalesPersonLogin { email: "u@e.no".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(session.sales_person.email, "u@e.no");
    /// assert!(session.token.is_some());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: SalesPersonLogin) -> Result<SalesPersonSession, ServiceError> {
        let found = self.repo.get_by_email(&input.email).await?.ok_or(ServiceError::Unauthorized)?;
        let parsed = PasswordHash::new(&found.hashed_password)
            .map_err(|e| ServiceError::Internal(format!("stored hash unreadable: {e}")))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            return Err(ServiceError::Unauthorized);
        }

        let mut token = None;
        if let Some(secret) = &self.cfg.jwt_secret {
            let exp = token_expiry(Utc::now(), self.cfg.token_ttl_hours)?;
            let claims = Claims { sub: found.email.clone(), uid: found.id.to_string(), exp };
            token = Some(
                encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
                    .map_err(|e| ServiceError::Internal(format!("token error: {e}")))?,
            );
        }
        info!(sales_person_id = %found.id, "sales_person_logged_in");
        Ok(SalesPersonSession { sales_person: found.into(), token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_ttl_hours_after_issue() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(token_expiry(now, 12).unwrap(), 1_700_000_000 + 12 * 3600);
    }

    #[test]
    fn oversized_ttl_is_an_error_not_a_panic() {
        let err = token_expiry(Utc::now(), i64::MAX).unwrap_err();
        assert!(matches!(err, ServiceError::Internal(_)));
        assert!(token_expiry(Utc::now(), i64::MAX / 3600).is_err());
    }
}
