use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{EntityTrait, ModelTrait};
use uuid::Uuid;

use crate::db::connect;
use crate::{accessory, brand, car_model, color, customer, insurance, sales_person};

use super::skip_db_tests;

fn unique(prefix: &str) -> String {
    format!("{prefix}_{}", &Uuid::new_v4().simple().to_string()[..12])
}

#[tokio::test]
async fn test_model_with_offered_colors() -> Result<()> {
    if skip_db_tests() {
        return Ok(());
    }
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;

    let b = brand::create(&db, &unique("brand"), "https://example.com/logo.png").await?;
    let red = color::create(&db, &unique("red"), 1500.0, (255, 0, 0)).await?;
    let blue = color::create(&db, &unique("blue"), 0.0, (0, 0, 255)).await?;
    let m = car_model::create(&db, &unique("model"), 250_000.0, b.id, &[red.id, blue.id]).await?;

    let offered = car_model::colors_of(&db, &m).await?;
    let ids: Vec<Uuid> = offered.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&red.id) && ids.contains(&blue.id));

    let found_brand = m.find_related(brand::Entity).one(&db).await?.expect("brand");
    assert_eq!(found_brand.id, b.id);

    car_model::Entity::delete_by_id(m.id).exec(&db).await?;
    color::Entity::delete_by_id(red.id).exec(&db).await?;
    color::Entity::delete_by_id(blue.id).exec(&db).await?;
    brand::Entity::delete_by_id(b.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_unique_names_are_enforced_by_schema() -> Result<()> {
    if skip_db_tests() {
        return Ok(());
    }
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;

    let name = unique("mats");
    let a = accessory::create(&db, &name, 990.0).await?;
    let dup = accessory::create(&db, &name, 10.0).await;
    assert!(matches!(dup, Err(crate::errors::ModelError::Db(_))));

    let ins = insurance::create(&db, &unique("theft"), 120.0).await?;
    insurance::Entity::delete_by_id(ins.id).exec(&db).await?;
    accessory::Entity::delete_by_id(a.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_customer_email_taken_excludes_self() -> Result<()> {
    if skip_db_tests() {
        return Ok(());
    }
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;

    let email = format!("{}@example.com", unique("cust"));
    let c = customer::create(&db, customer::NewCustomer {
        email: &email,
        phone_number: Some("+47 99887766"),
        first_name: "Kari",
        last_name: "Nordmann",
        address: None,
    })
    .await?;
    assert!(customer::is_email_taken(&db, &email, None).await?);
    assert!(!customer::is_email_taken(&db, &email, Some(c.id)).await?);

    let sp_email = format!("{}@example.com", unique("seller"));
    let sp = sales_person::create(&db, &sp_email, "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(), "Ola", "Hansen").await?;
    let found = sales_person::find_by_email(&db, &sp_email).await?.expect("sales person");
    assert_eq!(found.id, sp.id);

    sales_person::Entity::delete_by_id(sp.id).exec(&db).await?;
    customer::Entity::delete_by_id(c.id).exec(&db).await?;
    Ok(())
}
