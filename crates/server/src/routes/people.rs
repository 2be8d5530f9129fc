//! Customers and sales people, including sales-person login.
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use service::resources::{
    CustomerCreate, CustomerFilter, CustomerResource, CustomerUpdate, SalesPersonCreate, SalesPersonLogin,
    SalesPersonResource, SalesPersonSession,
};
use uuid::Uuid;

use crate::errors::JsonApiError;
use crate::state::ServerState;

type ApiResult<T> = Result<Json<T>, JsonApiError>;

#[utoipa::path(
    get, path = "/api/customers", tag = "customers", params(CustomerFilter),
    responses((status = 200, body = [CustomerResource]))
)]
pub async fn list_customers(
    State(state): State<ServerState>,
    query: Result<Query<CustomerFilter>, QueryRejection>,
) -> ApiResult<Vec<CustomerResource>> {
    let Query(filter) = query?;
    let customers = state
        .services
        .customers
        .get_all(&filter)
        .await
        .map_err(JsonApiError::context("Failed to get customers"))?;
    Ok(Json(customers))
}

#[utoipa::path(
    get, path = "/api/customer/{id}", tag = "customers",
    params(("id" = Uuid, Path, description = "Customer id")),
    responses((status = 200, body = CustomerResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn get_customer(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<CustomerResource> {
    let customer = state
        .services
        .customers
        .get_by_id(id)
        .await
        .map_err(JsonApiError::context("Failed to get customer"))?;
    Ok(Json(customer))
}

#[utoipa::path(
    post, path = "/api/customer", tag = "customers", request_body = CustomerCreate,
    responses((status = 200, body = CustomerResource), (status = 400, body = crate::errors::ErrorBody), (status = 422, body = crate::errors::ErrorBody))
)]
pub async fn create_customer(
    State(state): State<ServerState>,
    payload: Result<Json<CustomerCreate>, JsonRejection>,
) -> ApiResult<CustomerResource> {
    let Json(input) = payload?;
    let customer = state
        .services
        .customers
        .create(input)
        .await
        .map_err(JsonApiError::context("Failed to create customer"))?;
    Ok(Json(customer))
}

#[utoipa::path(
    put, path = "/api/customer/{id}", tag = "customers", request_body = CustomerUpdate,
    params(("id" = Uuid, Path, description = "Customer id")),
    responses((status = 200, body = CustomerResource), (status = 400, body = crate::errors::ErrorBody), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn update_customer(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<CustomerUpdate>, JsonRejection>,
) -> ApiResult<CustomerResource> {
    let Json(input) = payload?;
    let customer = state
        .services
        .customers
        .update(id, input)
        .await
        .map_err(JsonApiError::context("Failed to update customer"))?;
    Ok(Json(customer))
}

#[utoipa::path(
    delete, path = "/api/customer/{id}", tag = "customers",
    params(("id" = Uuid, Path, description = "Customer id")),
    responses((status = 200, body = CustomerResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn delete_customer(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<CustomerResource> {
    let customer = state
        .services
        .customers
        .delete(id)
        .await
        .map_err(JsonApiError::context("Failed to delete customer"))?;
    Ok(Json(customer))
}

/// Verifies the password and, when a JWT secret is configured, issues a bearer token.
#[utoipa::path(
    post, path = "/api/login", tag = "sales_people", request_body = SalesPersonLogin,
    responses((status = 200, body = SalesPersonSession), (status = 401, body = crate::errors::ErrorBody))
)]
pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Json<SalesPersonLogin>, JsonRejection>,
) -> ApiResult<SalesPersonSession> {
    let Json(input) = payload?;
    let session = state.services.sales_people.login(input).await.map_err(JsonApiError::context("Failed to log in"))?;
    Ok(Json(session))
}

#[utoipa::path(get, path = "/api/sales_people", tag = "sales_people", responses((status = 200, body = [SalesPersonResource])))]
pub async fn list_sales_people(State(state): State<ServerState>) -> ApiResult<Vec<SalesPersonResource>> {
    let people = state
        .services
        .sales_people
        .get_all()
        .await
        .map_err(JsonApiError::context("Failed to get sales people"))?;
    Ok(Json(people))
}

#[utoipa::path(
    get, path = "/api/sales_person/{id}", tag = "sales_people",
    params(("id" = Uuid, Path, description = "Sales person id")),
    responses((status = 200, body = SalesPersonResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn get_sales_person(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<SalesPersonResource> {
    let person = state
        .services
        .sales_people
        .get_by_id(id)
        .await
        .map_err(JsonApiError::context("Failed to get sales person"))?;
    Ok(Json(person))
}

#[utoipa::path(
    post, path = "/api/sales_person", tag = "sales_people", request_body = SalesPersonCreate,
    responses((status = 200, body = SalesPersonResource), (status = 400, body = crate::errors::ErrorBody), (status = 422, body = crate::errors::ErrorBody))
)]
pub async fn create_sales_person(
    State(state): State<ServerState>,
    payload: Result<Json<SalesPersonCreate>, JsonRejection>,
) -> ApiResult<SalesPersonResource> {
    let Json(input) = payload?;
    let person = state
        .services
        .sales_people
        .create(input)
        .await
        .map_err(JsonApiError::context("Failed to create sales person"))?;
    Ok(Json(person))
}
