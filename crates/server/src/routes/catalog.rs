//! Brands, models, colors, accessories and insurances.
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use service::resources::{
    AccessoryCreate, AccessoryResource, AccessoryUpdate, BrandCreate, BrandResource, BrandUpdate, ColorCreate,
    ColorResource, InsuranceCreate, InsuranceResource, InsuranceUpdate, LimitQuery, ModelFilter, ModelResource,
};
use uuid::Uuid;

use crate::errors::JsonApiError;
use crate::state::ServerState;

type ApiResult<T> = Result<Json<T>, JsonApiError>;

#[utoipa::path(get, path = "/api/brands", tag = "brands", responses((status = 200, body = [BrandResource])))]
pub async fn list_brands(State(state): State<ServerState>) -> ApiResult<Vec<BrandResource>> {
    let brands = state.services.brands.get_all().await.map_err(JsonApiError::context("Failed to get brands"))?;
    Ok(Json(brands))
}

#[utoipa::path(
    get, path = "/api/brand/{id}", tag = "brands",
    params(("id" = Uuid, Path, description = "Brand id")),
    responses((status = 200, body = BrandResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn get_brand(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<BrandResource> {
    let brand = state.services.brands.get_by_id(id).await.map_err(JsonApiError::context("Failed to get brand"))?;
    Ok(Json(brand))
}

#[utoipa::path(
    post, path = "/api/brand", tag = "brands", request_body = BrandCreate,
    responses((status = 200, body = BrandResource), (status = 400, body = crate::errors::ErrorBody), (status = 422, body = crate::errors::ErrorBody))
)]
pub async fn create_brand(
    State(state): State<ServerState>,
    payload: Result<Json<BrandCreate>, JsonRejection>,
) -> ApiResult<BrandResource> {
    let Json(input) = payload?;
    let brand = state.services.brands.create(input).await.map_err(JsonApiError::context("Failed to create brand"))?;
    Ok(Json(brand))
}

#[utoipa::path(
    put, path = "/api/brand/{id}", tag = "brands", request_body = BrandUpdate,
    params(("id" = Uuid, Path, description = "Brand id")),
    responses((status = 200, body = BrandResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn update_brand(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<BrandUpdate>, JsonRejection>,
) -> ApiResult<BrandResource> {
    let Json(input) = payload?;
    let brand = state.services.brands.update(id, input).await.map_err(JsonApiError::context("Failed to update brand"))?;
    Ok(Json(brand))
}

#[utoipa::path(
    delete, path = "/api/brand/{id}", tag = "brands",
    params(("id" = Uuid, Path, description = "Brand id")),
    responses((status = 200, body = BrandResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn delete_brand(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<BrandResource> {
    let brand = state.services.brands.delete(id).await.map_err(JsonApiError::context("Failed to delete brand"))?;
    Ok(Json(brand))
}

#[utoipa::path(
    get, path = "/api/models", tag = "models", params(ModelFilter),
    responses((status = 200, body = [ModelResource]), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn list_models(
    State(state): State<ServerState>,
    query: Result<Query<ModelFilter>, QueryRejection>,
) -> ApiResult<Vec<ModelResource>> {
    let Query(filter) = query?;
    let models = state
        .services
        .models
        .get_all(filter.brand_id)
        .await
        .map_err(JsonApiError::context("Failed to get models"))?;
    Ok(Json(models))
}

#[utoipa::path(
    get, path = "/api/model/{id}", tag = "models",
    params(("id" = Uuid, Path, description = "Model id")),
    responses((status = 200, body = ModelResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn get_model(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<ModelResource> {
    let model = state.services.models.get_by_id(id).await.map_err(JsonApiError::context("Failed to get model"))?;
    Ok(Json(model))
}

#[utoipa::path(get, path = "/api/colors", tag = "colors", responses((status = 200, body = [ColorResource])))]
pub async fn list_colors(State(state): State<ServerState>) -> ApiResult<Vec<ColorResource>> {
    let colors = state.services.colors.get_all().await.map_err(JsonApiError::context("Failed to get colors"))?;
    Ok(Json(colors))
}

#[utoipa::path(
    get, path = "/api/color/{id}", tag = "colors",
    params(("id" = Uuid, Path, description = "Color id")),
    responses((status = 200, body = ColorResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn get_color(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<ColorResource> {
    let color = state.services.colors.get_by_id(id).await.map_err(JsonApiError::context("Failed to get color"))?;
    Ok(Json(color))
}

#[utoipa::path(
    post, path = "/api/color", tag = "colors", request_body = ColorCreate,
    responses((status = 200, body = ColorResource), (status = 400, body = crate::errors::ErrorBody), (status = 422, body = crate::errors::ErrorBody))
)]
pub async fn create_color(
    State(state): State<ServerState>,
    payload: Result<Json<ColorCreate>, JsonRejection>,
) -> ApiResult<ColorResource> {
    let Json(input) = payload?;
    let color = state.services.colors.create(input).await.map_err(JsonApiError::context("Failed to create color"))?;
    Ok(Json(color))
}

#[utoipa::path(
    get, path = "/api/accessories", tag = "accessories", params(LimitQuery),
    responses((status = 200, body = [AccessoryResource]))
)]
pub async fn list_accessories(
    State(state): State<ServerState>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> ApiResult<Vec<AccessoryResource>> {
    let Query(q) = query?;
    let accessories = state
        .services
        .accessories
        .get_all(q.limit)
        .await
        .map_err(JsonApiError::context("Failed to get accessories"))?;
    Ok(Json(accessories))
}

#[utoipa::path(
    get, path = "/api/accessory/{id}", tag = "accessories",
    params(("id" = Uuid, Path, description = "Accessory id")),
    responses((status = 200, body = AccessoryResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn get_accessory(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<AccessoryResource> {
    let accessory = state
        .services
        .accessories
        .get_by_id(id)
        .await
        .map_err(JsonApiError::context("Failed to get accessory"))?;
    Ok(Json(accessory))
}

#[utoipa::path(
    post, path = "/api/accessory", tag = "accessories", request_body = AccessoryCreate,
    responses((status = 200, body = AccessoryResource), (status = 400, body = crate::errors::ErrorBody), (status = 422, body = crate::errors::ErrorBody))
)]
pub async fn create_accessory(
    State(state): State<ServerState>,
    payload: Result<Json<AccessoryCreate>, JsonRejection>,
) -> ApiResult<AccessoryResource> {
    let Json(input) = payload?;
    let accessory = state
        .services
        .accessories
        .create(input)
        .await
        .map_err(JsonApiError::context("Failed to create accessory"))?;
    Ok(Json(accessory))
}

#[utoipa::path(
    put, path = "/api/accessory/{id}", tag = "accessories", request_body = AccessoryUpdate,
    params(("id" = Uuid, Path, description = "Accessory id")),
    responses((status = 200, body = AccessoryResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn update_accessory(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<AccessoryUpdate>, JsonRejection>,
) -> ApiResult<AccessoryResource> {
    let Json(input) = payload?;
    let accessory = state
        .services
        .accessories
        .update(id, input)
        .await
        .map_err(JsonApiError::context("Failed to update accessory"))?;
    Ok(Json(accessory))
}

#[utoipa::path(
    delete, path = "/api/accessory/{id}", tag = "accessories",
    params(("id" = Uuid, Path, description = "Accessory id")),
    responses((status = 200, body = AccessoryResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn delete_accessory(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<AccessoryResource> {
    let accessory = state
        .services
        .accessories
        .delete(id)
        .await
        .map_err(JsonApiError::context("Failed to delete accessory"))?;
    Ok(Json(accessory))
}

#[utoipa::path(
    get, path = "/api/insurances", tag = "insurances", params(LimitQuery),
    responses((status = 200, body = [InsuranceResource]))
)]
pub async fn list_insurances(
    State(state): State<ServerState>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> ApiResult<Vec<InsuranceResource>> {
    let Query(q) = query?;
    let insurances = state
        .services
        .insurances
        .get_all(q.limit)
        .await
        .map_err(JsonApiError::context("Failed to get insurances"))?;
    Ok(Json(insurances))
}

#[utoipa::path(
    get, path = "/api/insurance/{id}", tag = "insurances",
    params(("id" = Uuid, Path, description = "Insurance id")),
    responses((status = 200, body = InsuranceResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn get_insurance(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<InsuranceResource> {
    let insurance = state
        .services
        .insurances
        .get_by_id(id)
        .await
        .map_err(JsonApiError::context("Failed to get insurance"))?;
    Ok(Json(insurance))
}

#[utoipa::path(
    post, path = "/api/insurance", tag = "insurances", request_body = InsuranceCreate,
    responses((status = 200, body = InsuranceResource), (status = 400, body = crate::errors::ErrorBody), (status = 422, body = crate::errors::ErrorBody))
)]
pub async fn create_insurance(
    State(state): State<ServerState>,
    payload: Result<Json<InsuranceCreate>, JsonRejection>,
) -> ApiResult<InsuranceResource> {
    let Json(input) = payload?;
    let insurance = state
        .services
        .insurances
        .create(input)
        .await
        .map_err(JsonApiError::context("Failed to create insurance"))?;
    Ok(Json(insurance))
}

#[utoipa::path(
    put, path = "/api/insurance/{id}", tag = "insurances", request_body = InsuranceUpdate,
    params(("id" = Uuid, Path, description = "Insurance id")),
    responses((status = 200, body = InsuranceResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn update_insurance(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<InsuranceUpdate>, JsonRejection>,
) -> ApiResult<InsuranceResource> {
    let Json(input) = payload?;
    let insurance = state
        .services
        .insurances
        .update(id, input)
        .await
        .map_err(JsonApiError::context("Failed to update insurance"))?;
    Ok(Json(insurance))
}

#[utoipa::path(
    delete, path = "/api/insurance/{id}", tag = "insurances",
    params(("id" = Uuid, Path, description = "Insurance id")),
    responses((status = 200, body = InsuranceResource), (status = 404, body = crate::errors::ErrorBody))
)]
pub async fn delete_insurance(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<InsuranceResource> {
    let insurance = state
        .services
        .insurances
        .delete(id)
        .await
        .map_err(JsonApiError::context("Failed to delete insurance"))?;
    Ok(Json(insurance))
}
