//! Cars and purchases.
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use service::resources::{CarCreate, CarFilter, CarResource, LimitQuery, PurchaseCreate, PurchaseResource};
use uuid::Uuid;

use crate::errors::JsonApiError;
use crate::state::ServerState;

type ApiResult<T> = Result<Json<T>, JsonApiError>;

#[utoipa::path(
    get, path = "/api/cars", tag = "cars", params(CarFilter),
    responses((status = 200, body = [CarResource]), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn list_cars(
    State(state): State<ServerState>,
    query: Result<Query<CarFilter>, QueryRejection>,
) -> ApiResult<Vec<CarResource>> {
    let Query(filter) = query?;
    let cars = state.services.cars.get_all(&filter).await.map_err(JsonApiError::context("Failed to get cars"))?;
    Ok(Json(cars))
}

#[utoipa::path(
    get, path = "/api/car/{id}", tag = "cars",
    params(("id" = Uuid, Path, description = "Car id")),
    responses((status = 200, body = CarResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn get_car(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<CarResource> {
    let car = state.services.cars.get_by_id(id).await.map_err(JsonApiError::context("Failed to get car"))?;
    Ok(Json(car))
}

/// Creates a car after checking every referenced entity and the purchase deadline.
#[utoipa::path(
    post, path = "/api/car", tag = "cars", request_body = CarCreate,
    responses(
        (status = 200, body = CarResource),
        (status = 400, description = "Color not offered by model", body = crate::errors::ErrorBody),
        (status = 404, description = "Referenced entity missing", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid field or deadline out of range", body = crate::errors::ErrorBody)
    )
)]
pub async fn create_car(
    State(state): State<ServerState>,
    payload: Result<Json<CarCreate>, JsonRejection>,
) -> ApiResult<CarResource> {
    let Json(input) = payload?;
    let car = state.services.cars.create(input).await.map_err(JsonApiError::context("Failed to create car"))?;
    Ok(Json(car))
}

#[utoipa::path(
    get, path = "/api/purchases", tag = "purchases", params(LimitQuery),
    responses((status = 200, body = [PurchaseResource]))
)]
pub async fn list_purchases(
    State(state): State<ServerState>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> ApiResult<Vec<PurchaseResource>> {
    let Query(q) = query?;
    let purchases = state
        .services
        .purchases
        .get_all(q.limit)
        .await
        .map_err(JsonApiError::context("Failed to get purchases"))?;
    Ok(Json(purchases))
}

#[utoipa::path(
    get, path = "/api/purchase/{id}", tag = "purchases",
    params(("id" = Uuid, Path, description = "Purchase id")),
    responses((status = 200, body = PurchaseResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn get_purchase(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<PurchaseResource> {
    let purchase = state
        .services
        .purchases
        .get_by_id(id)
        .await
        .map_err(JsonApiError::context("Failed to get purchase"))?;
    Ok(Json(purchase))
}

#[utoipa::path(
    post, path = "/api/purchase", tag = "purchases", request_body = PurchaseCreate,
    responses(
        (status = 200, body = PurchaseResource),
        (status = 400, description = "Already purchased or deadline passed", body = crate::errors::ErrorBody),
        (status = 404, body = crate::errors::ErrorBody)
    )
)]
pub async fn create_purchase(
    State(state): State<ServerState>,
    payload: Result<Json<PurchaseCreate>, JsonRejection>,
) -> ApiResult<PurchaseResource> {
    let Json(input) = payload?;
    let purchase = state
        .services
        .purchases
        .create(input)
        .await
        .map_err(JsonApiError::context("Failed to create purchase"))?;
    Ok(Json(purchase))
}
