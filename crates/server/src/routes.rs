use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod cars;
pub mod catalog;
pub mod people;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

fn api_routes() -> Router<ServerState> {
    Router::new()
        .route("/brands", get(catalog::list_brands))
        .route("/brand", post(catalog::create_brand))
        .route(
            "/brand/:id",
            get(catalog::get_brand).put(catalog::update_brand).delete(catalog::delete_brand),
        )
        .route("/models", get(catalog::list_models))
        .route("/model/:id", get(catalog::get_model))
        .route("/colors", get(catalog::list_colors))
        .route("/color", post(catalog::create_color))
        .route("/color/:id", get(catalog::get_color))
        .route("/accessories", get(catalog::list_accessories))
        .route("/accessory", post(catalog::create_accessory))
        .route(
            "/accessory/:id",
            get(catalog::get_accessory).put(catalog::update_accessory).delete(catalog::delete_accessory),
        )
        .route("/insurances", get(catalog::list_insurances))
        .route("/insurance", post(catalog::create_insurance))
        .route(
            "/insurance/:id",
            get(catalog::get_insurance).put(catalog::update_insurance).delete(catalog::delete_insurance),
        )
        .route("/customers", get(people::list_customers))
        .route("/customer", post(people::create_customer))
        .route(
            "/customer/:id",
            get(people::get_customer).put(people::update_customer).delete(people::delete_customer),
        )
        .route("/login", post(people::login))
        .route("/sales_people", get(people::list_sales_people))
        .route("/sales_person", post(people::create_sales_person))
        .route("/sales_person/:id", get(people::get_sales_person))
        .route("/cars", get(cars::list_cars))
        .route("/car", post(cars::create_car))
        .route("/car/:id", get(cars::get_car))
        .route("/purchases", get(cars::list_purchases))
        .route("/purchase", post(cars::create_purchase))
        .route("/purchase/:id", get(cars::get_purchase))
}

/// Build the full application router: `/health`, the `/api` resources and the Swagger UI.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
