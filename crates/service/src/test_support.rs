#![cfg(test)]
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;
use migration::MigratorTrait;
use uuid::Uuid;

use configs::AuthConfig;
use models::db::{connect_with_config, DatabaseConfig};

use crate::repository::{BrandRepository, ColorRepository, CustomerRepository, InMemoryRepository, SalesPersonRepository};
use crate::resources::{BrandCreate, ColorCreate, CustomerCreate};
use crate::Services;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

pub fn skip_db_tests() -> bool {
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { min_connections: 1, ..Default::default() };
    // Run migrations exactly once, with a throwaway connection
    MIGRATED
        .get_or_init(|| async {
            let db = connect_with_config(&cfg).await.expect("connect db for migration");
            migration::Migrator::up(&db, None).await.expect("migrate up");
        })
        .await;

    // Return a fresh connection for the current test's runtime
    Ok(connect_with_config(&cfg).await?)
}

/// In-memory services plus ids of a seeded catalog: one brand, a model offered in
/// red and black (but not green), one customer and one sales person.
pub struct Fixture {
    pub repo: Arc<InMemoryRepository>,
    pub services: Services,
    pub model_id: Uuid,
    pub red_id: Uuid,
    pub black_id: Uuid,
    pub green_id: Uuid,
    pub customer_id: Uuid,
    pub sales_person_id: Uuid,
}

pub async fn fixture() -> Fixture {
    let repo = Arc::new(InMemoryRepository::new());
    let services = Services::from_repository(repo.clone(), AuthConfig::default());

    let brand = BrandRepository::create(&*repo, &BrandCreate { name: "Tesla".into(), logo_url: "https://example.com/tesla.png".into() })
        .await
        .unwrap();
    let color = |name: &str, price: f64| ColorCreate { name: name.into(), price, red_value: 0, green_value: 0, blue_value: 0 };
    let red = ColorRepository::create(&*repo, &color("Red", 5_000.0)).await.unwrap();
    let black = ColorRepository::create(&*repo, &color("Black", 0.0)).await.unwrap();
    let green = ColorRepository::create(&*repo, &color("Green", 7_500.0)).await.unwrap();
    let model = repo.seed_model("Model 3", 400_000.0, brand.id, &[red.id, black.id]).await.unwrap();
    let customer = CustomerRepository::create(
        &*repo,
        &CustomerCreate {
            email: "kari@example.no".into(),
            phone_number: None,
            first_name: "Kari".into(),
            last_name: "Nordmann".into(),
            address: Some("Storgata 1, Oslo".into()),
        },
    )
    .await
    .unwrap();
    let sales_person = SalesPersonRepository::create(&*repo, "ola@dealer.no", "not-a-real-hash".into(), "Ola", "Hansen")
        .await
        .unwrap();

    Fixture {
        repo,
        services,
        model_id: model.id,
        red_id: red.id,
        black_id: black.id,
        green_id: green.id,
        customer_id: customer.id,
        sales_person_id: sales_person.id,
    }
}
