use utoipa::OpenApi;
use utoipa::ToSchema;

use service::resources::{
    AccessoryCreate, AccessoryResource, AccessoryUpdate, BrandCreate, BrandResource, BrandUpdate, CarCreate,
    CarResource, ColorCreate, ColorResource, CustomerCreate, CustomerResource, CustomerUpdate, InsuranceCreate,
    InsuranceResource, InsuranceUpdate, ModelResource, PurchaseCreate, PurchaseResource, SalesPersonCreate,
    SalesPersonLogin, SalesPersonResource, SalesPersonSession,
};

use crate::errors::ErrorBody;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::catalog::list_brands,
        crate::routes::catalog::get_brand,
        crate::routes::catalog::create_brand,
        crate::routes::catalog::update_brand,
        crate::routes::catalog::delete_brand,
        crate::routes::catalog::list_models,
        crate::routes::catalog::get_model,
        crate::routes::catalog::list_colors,
        crate::routes::catalog::get_color,
        crate::routes::catalog::create_color,
        crate::routes::catalog::list_accessories,
        crate::routes::catalog::get_accessory,
        crate::routes::catalog::create_accessory,
        crate::routes::catalog::update_accessory,
        crate::routes::catalog::delete_accessory,
        crate::routes::catalog::list_insurances,
        crate::routes::catalog::get_insurance,
        crate::routes::catalog::create_insurance,
        crate::routes::catalog::update_insurance,
        crate::routes::catalog::delete_insurance,
        crate::routes::people::list_customers,
        crate::routes::people::get_customer,
        crate::routes::people::create_customer,
        crate::routes::people::update_customer,
        crate::routes::people::delete_customer,
        crate::routes::people::login,
        crate::routes::people::list_sales_people,
        crate::routes::people::get_sales_person,
        crate::routes::people::create_sales_person,
        crate::routes::cars::list_cars,
        crate::routes::cars::get_car,
        crate::routes::cars::create_car,
        crate::routes::cars::list_purchases,
        crate::routes::cars::get_purchase,
        crate::routes::cars::create_purchase,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            BrandCreate,
            BrandUpdate,
            BrandResource,
            ModelResource,
            ColorCreate,
            ColorResource,
            AccessoryCreate,
            AccessoryUpdate,
            AccessoryResource,
            InsuranceCreate,
            InsuranceUpdate,
            InsuranceResource,
            CustomerCreate,
            CustomerUpdate,
            CustomerResource,
            SalesPersonCreate,
            SalesPersonLogin,
            SalesPersonResource,
            SalesPersonSession,
            CarCreate,
            CarResource,
            PurchaseCreate,
            PurchaseResource,
        )
    ),
    tags(
        (name = "health"),
        (name = "brands"),
        (name = "models"),
        (name = "colors"),
        (name = "accessories"),
        (name = "insurances"),
        (name = "customers"),
        (name = "sales_people"),
        (name = "cars"),
        (name = "purchases")
    )
)]
pub struct ApiDoc;
